//! The `Scalar` trait shared by every unit type
//!
//! A scalar is a single `f64` magnitude in a fixed reference unit. The
//! trait is what lets conversions, the JSON codec and the bridge work on
//! any unit without knowing which one it is.

use std::fmt;

/// A value that is fully described by one `f64` magnitude
pub trait Scalar: Copy + PartialEq + PartialOrd + Default + fmt::Display + Send + Sync + 'static {
    /// Unit suffix used in rendering (e.g. "kg")
    const SYMBOL: &'static str;
    /// Unit name (e.g. "kilogram")
    const NAME: &'static str;

    /// Wrap a raw magnitude, without validation
    fn from_magnitude(value: f64) -> Self;

    /// The raw magnitude
    fn magnitude(self) -> f64;
}

/// Plain numbers are scalars without a unit, so generic helpers
/// (e.g. percentage of) accept them alongside unit types.
impl Scalar for f64 {
    const SYMBOL: &'static str = "";
    const NAME: &'static str = "number";

    #[inline]
    fn from_magnitude(value: f64) -> Self {
        value
    }

    #[inline]
    fn magnitude(self) -> f64 {
        self
    }
}
