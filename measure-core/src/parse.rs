//! Invariant float parsing for unit magnitudes
//!
//! Grammar: optional sign, digits with an optional `.` fraction, optional
//! exponent. No thousands separators, no locale-specific decimal mark.
//! Surrounding whitespace is ignored. Non-finite values are spelled
//! `NaN`, `Infinity` and `-Infinity`, exactly.

use std::fmt;

use crate::json;
use crate::UnitError;

/// Magnitudes at or above this are rendered in exponent form
const EXPONENT_ABOVE: f64 = 1e15;
/// Non-zero magnitudes below this are rendered in exponent form
const EXPONENT_BELOW: f64 = 1e-5;

/// Parse a magnitude, reporting failures against `unit`
pub fn parse_magnitude(text: &str, unit: &'static str) -> Result<f64, UnitError> {
    let trimmed = text.trim();
    let body = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if body.starts_with(|c: char| c.is_ascii_alphabetic()) {
        // std also takes `inf`, `nan` and `infinity` in any case
        return json::parse_named_literal(trimmed).ok_or_else(|| UnitError::parse(unit, text));
    }
    trimmed.parse::<f64>().map_err(|_| UnitError::parse(unit, text))
}

/// Parse a magnitude, substituting zero on failure
///
/// Returns `(false, 0.0)` for unparsable input rather than an error.
pub fn try_parse_magnitude(text: &str, unit: &'static str) -> (bool, f64) {
    match parse_magnitude(text, unit) {
        Ok(value) => (true, value),
        Err(err) => {
            tracing::debug!(unit, text, error = %err, "unparsable magnitude, using zero");
            (false, 0.0)
        }
    }
}

/// Write a magnitude in the form `parse_magnitude` reads back
///
/// Very large and very small magnitudes switch to exponent form
/// (`1e300`, `1.5e-7`) instead of printing every digit.
pub fn write_magnitude(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if let Some(literal) = json::named_literal(value) {
        return f.write_str(literal);
    }
    let abs = value.abs();
    if abs >= EXPONENT_ABOVE || (abs != 0.0 && abs < EXPONENT_BELOW) {
        write!(f, "{:e}", value)
    } else {
        write!(f, "{}", value)
    }
}
