//! Convention constants selected by the dimensions of a computed value.
//!
//! Both tables are keyed on the intermediate a formula has just produced,
//! so Gaussian and SI inputs go through the same code and pick up their
//! own constant.

use std::f64::consts::PI;

use gauge_units::constants::{mu_0, speed_of_light};
use gauge_units::{DimensionTable, Dimensions, Quantity, Unit};

/// Factor relating `B²` to twice the field energy density.
///
/// Keyed on the dimensions of `B²`: `4π` for gauss², `μ₀` for tesla².
pub fn magnetic_factors() -> DimensionTable {
    DimensionTable::new()
        .with(
            Dimensions::MAGNETIC_FIELD_CGS.powi(2),
            Quantity::scalar(4.0 * PI, Unit::DIMENSIONLESS),
        )
        .with(Dimensions::MAGNETIC_FIELD_MKS.powi(2), mu_0())
}

/// Ampère's-law constant relating `curl B` to the current density.
///
/// Keyed on the dimensions of `curl B`: `4π/c` for gauss/cm, `μ₀` for
/// tesla/m.
pub fn current_factors() -> DimensionTable {
    DimensionTable::new()
        .with(
            Dimensions::MAGNETIC_FIELD_CGS / Dimensions::LENGTH,
            &Quantity::scalar(4.0 * PI, Unit::DIMENSIONLESS) / &speed_of_light(),
        )
        .with(Dimensions::MAGNETIC_FIELD_MKS / Dimensions::LENGTH, mu_0())
}
