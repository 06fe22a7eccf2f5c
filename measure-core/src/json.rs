//! JSON codec for unit magnitudes
//!
//! Finite magnitudes are written as bare JSON numbers. Non-finite ones
//! use the named float literals `"NaN"`, `"Infinity"` and `"-Infinity"`
//! when `FloatLiterals::Named` is active; in `Strict` mode they cannot be
//! encoded and the literal strings are rejected on decode.

use std::fmt;

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use crate::{Scalar, UnitError};

pub const NAN: &str = "NaN";
pub const INFINITY: &str = "Infinity";
pub const NEG_INFINITY: &str = "-Infinity";

/// Integral magnitudes below this are written without a fraction
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// How non-finite magnitudes are represented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloatLiterals {
    /// Encode as the strings "NaN" / "Infinity" / "-Infinity"
    #[default]
    Named,
    /// Plain JSON numbers only
    Strict,
}

/// JSON encoding options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonOptions {
    pub float_literals: FloatLiterals,
}

impl JsonOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that refuse named float literals
    pub fn strict() -> Self {
        Self::new().with_float_literals(FloatLiterals::Strict)
    }

    pub fn with_float_literals(mut self, float_literals: FloatLiterals) -> Self {
        self.float_literals = float_literals;
        self
    }

    pub fn allows_named_literals(&self) -> bool {
        self.float_literals == FloatLiterals::Named
    }
}

/// The literal for a non-finite value, `None` for finite ones
pub fn named_literal(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some(NAN)
    } else if value == f64::INFINITY {
        Some(INFINITY)
    } else if value == f64::NEG_INFINITY {
        Some(NEG_INFINITY)
    } else {
        None
    }
}

/// Inverse of `named_literal`. Matching is case-sensitive.
pub fn parse_named_literal(token: &str) -> Option<f64> {
    match token {
        NAN => Some(f64::NAN),
        INFINITY => Some(f64::INFINITY),
        NEG_INFINITY => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

fn is_integral(value: f64) -> bool {
    value.fract() == 0.0
        && value.abs() < MAX_SAFE_INTEGER
        && !(value == 0.0 && value.is_sign_negative())
}

pub fn serialize_magnitude<S: Serializer>(
    value: f64,
    serializer: S,
    mode: FloatLiterals,
) -> Result<S::Ok, S::Error> {
    match named_literal(value) {
        None if is_integral(value) => serializer.serialize_i64(value as i64),
        None => serializer.serialize_f64(value),
        Some(literal) => match mode {
            FloatLiterals::Named => serializer.serialize_str(literal),
            FloatLiterals::Strict => Err(ser::Error::custom(format!(
                "cannot encode {} without named float literals",
                literal
            ))),
        },
    }
}

struct MagnitudeVisitor {
    mode: FloatLiterals,
}

impl<'de> de::Visitor<'de> for MagnitudeVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            FloatLiterals::Named => write!(
                f,
                "a number or one of \"{}\", \"{}\", \"{}\"",
                NAN, INFINITY, NEG_INFINITY
            ),
            FloatLiterals::Strict => f.write_str("a number"),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        match parse_named_literal(v) {
            Some(value) if self.mode == FloatLiterals::Named => Ok(value),
            _ => {
                tracing::debug!(token = v, mode = ?self.mode, "rejected JSON magnitude");
                Err(E::invalid_value(de::Unexpected::Str(v), &self))
            }
        }
    }
}

pub fn deserialize_magnitude<'de, D: Deserializer<'de>>(
    deserializer: D,
    mode: FloatLiterals,
) -> Result<f64, D::Error> {
    deserializer.deserialize_any(MagnitudeVisitor { mode })
}

/// Encode a single value as a JSON document
pub fn to_string<T: Scalar>(value: T, options: &JsonOptions) -> Result<String, UnitError> {
    let mut serializer = serde_json::Serializer::new(Vec::new());
    serialize_magnitude(value.magnitude(), &mut serializer, options.float_literals)?;
    String::from_utf8(serializer.into_inner()).map_err(|e| UnitError::format(e.to_string()))
}

/// Decode a single value from a JSON document
pub fn from_str<T: Scalar>(text: &str, options: &JsonOptions) -> Result<T, UnitError> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    let value = deserialize_magnitude(&mut deserializer, options.float_literals)?;
    deserializer.end()?;
    Ok(T::from_magnitude(value))
}

/// `#[serde(with = "measure_core::json::named")]`: named float literals
pub mod named {
    use super::*;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Scalar,
        S: Serializer,
    {
        serialize_magnitude(value.magnitude(), serializer, FloatLiterals::Named)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Scalar,
        D: Deserializer<'de>,
    {
        deserialize_magnitude(deserializer, FloatLiterals::Named).map(T::from_magnitude)
    }
}

/// `#[serde(with = "measure_core::json::strict")]`: plain numbers only
pub mod strict {
    use super::*;

    pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Scalar,
        S: Serializer,
    {
        serialize_magnitude(value.magnitude(), serializer, FloatLiterals::Strict)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Scalar,
        D: Deserializer<'de>,
    {
        deserialize_magnitude(deserializer, FloatLiterals::Strict).map(T::from_magnitude)
    }
}
