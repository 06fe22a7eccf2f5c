//! Measure Core - Fundamental types
//!
//! This crate provides the building blocks shared by every unit:
//! - `Scalar`: the trait every unit type implements
//! - `scalar_unit!`: the template that generates a unit type
//! - `UnitError`: structured errors with machine-readable codes
//! - `json`: the JSON magnitude codec and its `JsonOptions`
//! - `parse`: invariant float parsing

mod error;
mod scalar;
mod unit;
pub mod json;
pub mod parse;

pub use error::{codes, UnitError};
pub use json::{FloatLiterals, JsonOptions};
pub use scalar::Scalar;

/// Re-exports used by `scalar_unit!` expansions
#[doc(hidden)]
pub mod __private {
    pub use serde;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{FloatLiterals, JsonOptions, Scalar, UnitError};
    pub use crate::error::codes;
}
