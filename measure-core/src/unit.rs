//! The scalar unit template
//!
//! `scalar_unit!` stamps out one unit type: an `f64` newtype with
//! constructors, parsing, raw `f64` arithmetic, `f64` comparison
//! semantics, rendering with a suffix, and serde support with named
//! float literals. Unit-specific conversions are written by hand next to
//! each invocation.

/// Define a unit type wrapping an `f64` magnitude
///
/// ```
/// measure_core::scalar_unit! {
///     /// Mass in grams
///     Gram, symbol: "g", name: "gram"
/// }
///
/// let total = Gram::new(2.5) + Gram::new(0.5);
/// assert_eq!(total, Gram::new(3.0));
/// assert_eq!(total.to_string(), "3 g");
/// ```
#[macro_export]
macro_rules! scalar_unit {
    (
        $(#[$meta:meta])*
        $name:ident, symbol: $symbol:literal, name: $unit_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
        #[repr(transparent)]
        pub struct $name(f64);

        impl $name {
            /// Zero magnitude
            pub const EMPTY: $name = $name(0.0);

            #[inline]
            #[must_use]
            pub const fn new(value: f64) -> Self {
                $name(value)
            }

            /// The raw magnitude
            #[inline]
            #[must_use]
            pub const fn value(self) -> f64 {
                self.0
            }

            /// Parse an invariant float literal
            pub fn parse(text: &str) -> Result<Self, $crate::UnitError> {
                $crate::parse::parse_magnitude(text, $symbol).map($name)
            }

            /// Parse, falling back to zero. The flag reports success.
            pub fn try_parse(text: &str) -> (bool, Self) {
                let (parsed, value) = $crate::parse::try_parse_magnitude(text, $symbol);
                (parsed, $name(value))
            }

            /// IEEE 754 total order, for sorting
            #[inline]
            pub fn total_cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                self.0.total_cmp(&other.0)
            }
        }

        impl $crate::Scalar for $name {
            const SYMBOL: &'static str = $symbol;
            const NAME: &'static str = $unit_name;

            #[inline]
            fn from_magnitude(value: f64) -> Self {
                $name(value)
            }

            #[inline]
            fn magnitude(self) -> f64 {
                self.0
            }
        }

        impl ::std::ops::Add for $name {
            type Output = $name;
            #[inline]
            fn add(self, rhs: $name) -> $name {
                $name(self.0 + rhs.0)
            }
        }

        impl ::std::ops::Sub for $name {
            type Output = $name;
            #[inline]
            fn sub(self, rhs: $name) -> $name {
                $name(self.0 - rhs.0)
            }
        }

        impl ::std::ops::Mul for $name {
            type Output = $name;
            #[inline]
            fn mul(self, rhs: $name) -> $name {
                $name(self.0 * rhs.0)
            }
        }

        impl ::std::ops::Div for $name {
            type Output = $name;
            #[inline]
            fn div(self, rhs: $name) -> $name {
                $name(self.0 / rhs.0)
            }
        }

        impl ::std::convert::From<f64> for $name {
            fn from(value: f64) -> Self {
                $name(value)
            }
        }

        impl ::std::convert::From<f32> for $name {
            fn from(value: f32) -> Self {
                $name(f64::from(value))
            }
        }

        impl ::std::convert::From<i32> for $name {
            fn from(value: i32) -> Self {
                $name(f64::from(value))
            }
        }

        impl ::std::convert::From<$name> for f64 {
            fn from(value: $name) -> f64 {
                value.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                $crate::parse::write_magnitude(f, self.0)?;
                write!(f, " {}", $symbol)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::UnitError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $name::parse(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::json::named::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::json::named::deserialize(deserializer)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{json, JsonOptions, Scalar, UnitError};
    use std::cmp::Ordering;

    crate::scalar_unit! {
        /// Test unit
        Gram, symbol: "g", name: "gram"
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Gram::default(), Gram::new(0.0));
        assert_eq!(Gram::EMPTY, Gram::new(0.0));
        let missing: Option<Gram> = None;
        assert_eq!(missing.unwrap_or_default(), Gram::EMPTY);
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(Gram::new(10.5) + Gram::new(10.5), Gram::new(21.0));
        assert_eq!(Gram::new(10.5) - Gram::new(5.5), Gram::new(5.0));
        assert_eq!(Gram::new(10.5) * Gram::new(10.0), Gram::new(105.0));
        assert_eq!(Gram::new(10.0) / Gram::new(5.0), Gram::new(2.0));
    }

    #[test]
    fn test_arithmetic_matches_f64() {
        let pairs = [(0.1, 0.2), (1e308, 1e308), (-3.5, 7.25), (5.0, 3.0)];
        for (a, b) in pairs {
            assert_eq!((Gram::new(a) + Gram::new(b)).value(), a + b);
            assert_eq!((Gram::new(a) - Gram::new(b)).value(), a - b);
            assert_eq!((Gram::new(a) * Gram::new(b)).value(), a * b);
            assert_eq!((Gram::new(a) / Gram::new(b)).value(), a / b);
        }
    }

    #[test]
    fn test_division_by_zero_is_ieee() {
        assert_eq!((Gram::new(1.0) / Gram::new(0.0)).value(), f64::INFINITY);
        assert_eq!((Gram::new(-1.0) / Gram::new(0.0)).value(), f64::NEG_INFINITY);
        assert!((Gram::new(0.0) / Gram::new(0.0)).value().is_nan());
    }

    #[test]
    fn test_comparison() {
        // (left, right, ==, !=, <, <=, >, >=)
        let cases = [
            (10.5, 10.5, true, false, false, true, false, true),
            (5.5, 10.5, false, true, true, true, false, false),
            (10.5, 5.5, false, true, false, false, true, true),
        ];
        for (l, r, eq, ne, lt, le, gt, ge) in cases {
            let (left, right) = (Gram::new(l), Gram::new(r));
            assert_eq!(left == right, eq);
            assert_eq!(left != right, ne);
            assert_eq!(left < right, lt);
            assert_eq!(left <= right, le);
            assert_eq!(left > right, gt);
            assert_eq!(left >= right, ge);
        }
    }

    #[test]
    fn test_nan_follows_f64() {
        let nan = Gram::new(f64::NAN);
        assert_ne!(nan, nan);
        assert!(!(nan < Gram::new(1.0)));
        assert!(!(nan > Gram::new(1.0)));
        assert_eq!(nan.partial_cmp(&Gram::new(1.0)), None);
        assert_eq!(Gram::new(-0.0), Gram::new(0.0));
    }

    #[test]
    fn test_total_cmp_sorts() {
        let mut values = vec![Gram::new(3.0), Gram::new(f64::NAN), Gram::new(-1.0), Gram::new(2.0)];
        values.sort_by(Gram::total_cmp);
        assert_eq!(&values[..3], &[Gram::new(-1.0), Gram::new(2.0), Gram::new(3.0)]);
        assert!(values[3].value().is_nan());
        assert_eq!(Gram::new(1.0).total_cmp(&Gram::new(1.0)), Ordering::Equal);
    }

    #[test]
    fn test_raw_conversions() {
        let expected = Gram::new(10.0);
        assert_eq!(Gram::from(10.0_f64), expected);
        assert_eq!(Gram::from(10.0_f32), expected);
        assert_eq!(Gram::from(10_i32), expected);
        assert_eq!(f64::from(expected), 10.0);
        assert_eq!(expected.value(), 10.0);
        assert_eq!(expected.magnitude(), 10.0);
        assert_eq!(Gram::from_magnitude(10.0), expected);
    }

    #[test]
    fn test_display() {
        assert_eq!(Gram::new(10.5).to_string(), "10.5 g");
        assert_eq!(Gram::new(10.0).to_string(), "10 g");
        assert_eq!(Gram::new(f64::NAN).to_string(), "NaN g");
        assert_eq!(Gram::new(f64::NEG_INFINITY).to_string(), "-Infinity g");
        assert_eq!(Gram::new(1e300).to_string(), "1e300 g");
        assert_eq!(Gram::new(2e-9).to_string(), "2e-9 g");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Gram::parse("10.5").unwrap(), Gram::new(10.5));
        assert_eq!("0.575".parse::<Gram>().unwrap(), Gram::new(0.575));
        assert_eq!(Gram::parse("ten").unwrap_err(), UnitError::parse("g", "ten"));
        assert_eq!(Gram::parse("inf").unwrap_err(), UnitError::parse("g", "inf"));
        assert_eq!(Gram::parse("Infinity").unwrap(), Gram::new(f64::INFINITY));
    }

    #[test]
    fn test_try_parse() {
        assert_eq!(Gram::try_parse("10.5"), (true, Gram::new(10.5)));
        assert_eq!(Gram::try_parse("not-a-number"), (false, Gram::new(0.0)));
        assert_eq!(Gram::try_parse("nan"), (false, Gram::new(0.0)));
    }

    #[test]
    fn test_serde() {
        assert_eq!(serde_json::to_string(&Gram::new(10.5)).unwrap(), "10.5");
        assert_eq!(serde_json::to_string(&Gram::new(f64::NAN)).unwrap(), "\"NaN\"");
        assert_eq!(serde_json::from_str::<Gram>("10").unwrap(), Gram::new(10.0));
        assert!(serde_json::from_str::<Gram>("\"NaN\"").unwrap().value().is_nan());
        assert!(serde_json::from_str::<Gram>("\"ten\"").is_err());

        let opts = JsonOptions::strict();
        assert!(json::to_string(Gram::new(f64::INFINITY), &opts).is_err());
        assert_eq!(json::from_str::<Gram>("7", &opts).unwrap(), Gram::new(7.0));
    }

    #[test]
    fn test_symbol_and_name() {
        assert_eq!(Gram::SYMBOL, "g");
        assert_eq!(Gram::NAME, "gram");
    }
}
