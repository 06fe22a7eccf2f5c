//! Mass units

use crate::{Density, Liter};

measure_core::scalar_unit! {
    /// Mass in kilograms, the SI unit of mass
    Kilogram, symbol: "kg", name: "kilogram"
}

measure_core::scalar_unit! {
    /// Mass in tonnes (1 t = 1000 kg)
    Tonne, symbol: "t", name: "tonne"
}

/// Kilograms per tonne
const KG_PER_TONNE: f64 = 1000.0;

impl Kilogram {
    pub fn to_tonne(self) -> Tonne {
        Tonne::new(self.value() / KG_PER_TONNE)
    }

    /// Volume this mass occupies at `density`. Zero density gives zero volume.
    pub fn to_liter(self, density: Density) -> Liter {
        if density.value() == 0.0 {
            Liter::EMPTY
        } else {
            Liter::new(self.value() / density.value() * 1000.0)
        }
    }
}

impl Tonne {
    pub fn to_kilogram(self) -> Kilogram {
        Kilogram::new(self.value() * KG_PER_TONNE)
    }
}

impl From<Tonne> for Kilogram {
    fn from(t: Tonne) -> Kilogram {
        t.to_kilogram()
    }
}

impl From<Kilogram> for Tonne {
    fn from(kg: Kilogram) -> Tonne {
        kg.to_tonne()
    }
}
