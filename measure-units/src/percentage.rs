//! Percentage: a ratio expressed as a fraction of 100

use measure_core::Scalar;

measure_core::scalar_unit! {
    /// A number or ratio expressed as a fraction of 100
    Percentage, symbol: "%", name: "percentage"
}

impl Percentage {
    /// Percentage that `amount` is of `total`. Zero total gives zero.
    pub fn from_ratio(amount: f64, total: f64) -> Percentage {
        if total == 0.0 {
            Percentage::EMPTY
        } else {
            Percentage::new(amount / total * 100.0)
        }
    }

    /// The percentage as a ratio (50 % -> 0.5)
    pub fn fraction(self) -> f64 {
        self.value() / 100.0
    }

    /// This percentage of `value`
    pub fn of<T: Scalar>(self, value: T) -> T {
        T::from_magnitude(value.magnitude() * self.fraction())
    }

    /// The whole that `value` is this percentage of.
    ///
    /// Not guarded: a zero percentage yields an infinite or NaN total.
    pub fn total<T: Scalar>(self, value: T) -> T {
        T::from_magnitude(value.magnitude() / self.fraction())
    }

    /// What is left of the total once `value` is taken out
    pub fn remainder<T: Scalar>(self, value: T) -> T {
        T::from_magnitude(self.total(value).magnitude() - value.magnitude())
    }
}
