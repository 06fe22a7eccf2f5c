//! Measure Bridge - Unit values at non-JSON boundaries
//!
//! - `bridge`: text / double / int ⇄ unit conversion, keyed on value kinds
//! - `BridgeRegistry`: bridges looked up by unit name or symbol
//! - `storage`: unit ⇄ raw `f64` column converters, with nullable variants

mod bridge;
mod registry;
mod value;
pub mod storage;

pub use bridge::{
    can_convert_from, can_convert_to, convert_from, convert_to, BridgeMeta, ScalarBridge,
    UnitBridge,
};
pub use registry::{load_unit_bridges, BridgeRegistry};
pub use storage::{ColumnConverter, NullableScalarColumn, ScalarColumn};
pub use value::{ExternalValue, ValueKind};

/// Re-export core types for bridge users
pub mod prelude {
    pub use crate::{
        BridgeMeta, BridgeRegistry, ColumnConverter, ExternalValue, NullableScalarColumn,
        ScalarBridge, ScalarColumn, UnitBridge, ValueKind,
    };
    pub use measure_units::prelude::*;
}
