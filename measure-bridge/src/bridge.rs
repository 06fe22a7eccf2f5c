//! Generic external-format bridge
//!
//! Routes are keyed on the (source kind, destination kind) pair. A unit
//! is read from text, a double or an int, and written back out as text
//! (its display form), a double or an int (truncated toward zero).

use std::marker::PhantomData;

use measure_core::{parse, Scalar, UnitError};
use serde::Serialize;

use crate::{ExternalValue, ValueKind};

/// Whether a unit can be read from `kind`
pub fn can_convert_from(kind: ValueKind) -> bool {
    matches!(kind, ValueKind::Text | ValueKind::Double | ValueKind::Int)
}

/// Whether a unit can be written as `kind`
pub fn can_convert_to(kind: ValueKind) -> bool {
    matches!(kind, ValueKind::Text | ValueKind::Double | ValueKind::Int)
}

/// Read `source` as a `T`
pub fn convert_from<T: Scalar>(source: &ExternalValue) -> Result<T, UnitError> {
    let magnitude = match source {
        ExternalValue::Text(text) => parse::parse_magnitude(text, T::SYMBOL)?,
        ExternalValue::Double(value) => *value,
        ExternalValue::Int(value) => f64::from(*value),
        other => {
            tracing::debug!(unit = T::NAME, kind = %other.kind(), "unsupported bridge source");
            return Err(UnitError::unsupported(T::NAME, other.kind().name(), T::SYMBOL));
        }
    };
    tracing::trace!(unit = T::NAME, kind = %source.kind(), magnitude, "bridged into unit");
    Ok(T::from_magnitude(magnitude))
}

/// Write `value` out as `destination`
pub fn convert_to<T: Scalar>(value: T, destination: ValueKind) -> Result<ExternalValue, UnitError> {
    let converted = match destination {
        ValueKind::Text => ExternalValue::Text(value.to_string()),
        ValueKind::Double => ExternalValue::Double(value.magnitude()),
        // `as` truncates toward zero and saturates at the i32 bounds
        ValueKind::Int => ExternalValue::Int(value.magnitude() as i32),
        other => {
            tracing::debug!(unit = T::NAME, kind = %other, "unsupported bridge destination");
            return Err(UnitError::unsupported(T::NAME, T::SYMBOL, other.name()));
        }
    };
    tracing::trace!(unit = T::NAME, kind = %destination, "bridged out of unit");
    Ok(converted)
}

/// Describes a unit registered with the bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BridgeMeta {
    pub name: &'static str,
    pub symbol: &'static str,
}

/// Type-erased bridge for one unit, used where the unit is only known by name
pub trait UnitBridge: Send + Sync {
    fn meta(&self) -> BridgeMeta;

    fn can_convert_from(&self, kind: ValueKind) -> bool {
        can_convert_from(kind)
    }

    fn can_convert_to(&self, kind: ValueKind) -> bool {
        can_convert_to(kind)
    }

    /// Read `source` as this unit, then write it out as `destination`
    fn convert(
        &self,
        source: &ExternalValue,
        destination: ValueKind,
    ) -> Result<ExternalValue, UnitError>;
}

/// `UnitBridge` for any `Scalar`
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarBridge<T> {
    _unit: PhantomData<fn() -> T>,
}

impl<T: Scalar> ScalarBridge<T> {
    pub const fn new() -> Self {
        Self { _unit: PhantomData }
    }
}

impl<T: Scalar> UnitBridge for ScalarBridge<T> {
    fn meta(&self) -> BridgeMeta {
        BridgeMeta {
            name: T::NAME,
            symbol: T::SYMBOL,
        }
    }

    fn convert(
        &self,
        source: &ExternalValue,
        destination: ValueKind,
    ) -> Result<ExternalValue, UnitError> {
        let value: T = convert_from(source)?;
        convert_to(value, destination)
    }
}
