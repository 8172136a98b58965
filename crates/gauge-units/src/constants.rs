//! Physical constants used by the derived-field conventions.

use std::f64::consts::PI;

use crate::dimensions::Dimensions;
use crate::quantity::Quantity;
use crate::unit::Unit;

/// Speed of light in cm/s.
pub const SPEED_OF_LIGHT_CGS: f64 = 2.997_924_58e10;

/// Vacuum permeability in kg·m/(A²·s²).
pub const MU_0_SI: f64 = 4.0 * PI * 1.0e-7;

/// Unit of [`mu_0`]: kg·m/(A²·s²) (equivalently N/A²).
pub fn mu_0_units() -> Unit {
    Unit::new(
        "kg*m/(A**2*s**2)",
        Dimensions::MASS * Dimensions::LENGTH
            / (Dimensions::CURRENT_MKS.powi(2) * Dimensions::TIME.powi(2)),
        Unit::KILOGRAM.scale() * Unit::METER.scale(),
    )
}

/// Vacuum permeability as a rank-0 quantity.
pub fn mu_0() -> Quantity {
    Quantity::scalar(MU_0_SI, mu_0_units())
}

/// Speed of light as a rank-0 quantity in cm/s.
pub fn speed_of_light() -> Quantity {
    Quantity::scalar(SPEED_OF_LIGHT_CGS, Unit::CM_PER_S)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_squared_over_mu0_is_pressure() {
        let b2 = Unit::TESLA.powi(2);
        let p = b2.divide(&mu_0_units());
        assert_eq!(p.dims(), Dimensions::PRESSURE);
        assert_eq!(p.conversion_factor(&Unit::PASCAL).unwrap(), 1.0);
    }

    #[test]
    fn mu0_value() {
        assert!((MU_0_SI - 1.256_637_061_435_917_3e-6).abs() < 1e-20);
        assert_eq!(mu_0().units().dims(), mu_0_units().dims());
    }
}
