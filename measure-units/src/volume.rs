//! Volume units

use crate::{Density, Kilogram};

measure_core::scalar_unit! {
    /// Volume in liters (1 L = 0.001 m3)
    Liter, symbol: "L", name: "liter"
}

measure_core::scalar_unit! {
    /// Volume in cubic metres, the SI unit of volume
    CubicMetre, symbol: "m3", name: "cubic metre"
}

/// Liters per cubic metre
const LITERS_PER_CUBIC_METRE: f64 = 1000.0;

impl Liter {
    pub fn to_cubic_metre(self) -> CubicMetre {
        CubicMetre::new(self.value() / LITERS_PER_CUBIC_METRE)
    }

    /// Mass of this volume at `density`
    pub fn to_kilogram(self, density: Density) -> Kilogram {
        Kilogram::new(self.value() * density.value() / 1000.0)
    }
}

impl CubicMetre {
    pub fn to_liter(self) -> Liter {
        Liter::new(self.value() * LITERS_PER_CUBIC_METRE)
    }
}

impl From<CubicMetre> for Liter {
    fn from(m3: CubicMetre) -> Liter {
        m3.to_liter()
    }
}

impl From<Liter> for CubicMetre {
    fn from(l: Liter) -> CubicMetre {
        l.to_cubic_metre()
    }
}
