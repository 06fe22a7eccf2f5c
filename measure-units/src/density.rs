//! Density: mass per unit volume

use crate::{Kilogram, Liter};

measure_core::scalar_unit! {
    /// Density in kilograms per cubic metre
    Density, symbol: "kg/m3", name: "density"
}

impl Density {
    /// Density of water, 1000 kg/m3
    pub const WATER: Density = Density::new(1000.0);

    /// Density of `mass` spread over `volume`. Zero volume gives zero density.
    pub fn from_mass_and_volume(mass: Kilogram, volume: Liter) -> Density {
        if volume.value() == 0.0 {
            Density::EMPTY
        } else {
            Density::new(mass.value() / volume.value() * 1000.0)
        }
    }
}
