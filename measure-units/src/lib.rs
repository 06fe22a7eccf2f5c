//! Measure Units - Mass, volume, density and percentage
//!
//! Each unit is an `f64` newtype in a fixed reference unit. Units never
//! mix implicitly; conversions are explicit methods or `From` impls.
//!
//! Categories:
//! - Mass (kg, t)
//! - Volume (L, m3)
//! - Density (kg/m3), linking mass and volume
//! - Percentage (%), applied to plain numbers or any unit

mod density;
mod mass;
mod percentage;
mod volume;

pub use density::Density;
pub use mass::{Kilogram, Tonne};
pub use percentage::Percentage;
pub use volume::{CubicMetre, Liter};

pub use measure_core::{JsonOptions, Scalar, UnitError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{CubicMetre, Density, Kilogram, Liter, Percentage, Tonne};
    pub use measure_core::prelude::*;
}
