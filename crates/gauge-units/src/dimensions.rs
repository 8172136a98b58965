//! Dimensional exponents and the named physical dimensions.

use std::fmt;
use std::ops::{Div, Mul};

/// One of the base dimensions every [`Dimensions`] value is expressed in.
///
/// Electric current is an SI-only base dimension: Gaussian electromagnetic
/// quantities are built from mass, length and time with half-integer powers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseDimension {
    /// Mass (g in the Gaussian base).
    Mass,
    /// Length (cm in the Gaussian base).
    Length,
    /// Time (s).
    Time,
    /// Thermodynamic temperature (K).
    Temperature,
    /// Plane angle (rad).
    Angle,
    /// SI electric current (A).
    CurrentMks,
}

impl BaseDimension {
    /// All base dimensions in storage order.
    pub const ALL: [BaseDimension; 6] = [
        Self::Mass,
        Self::Length,
        Self::Time,
        Self::Temperature,
        Self::Angle,
        Self::CurrentMks,
    ];

    /// Lower-case dimension name, e.g. `"current_mks"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mass => "mass",
            Self::Length => "length",
            Self::Time => "time",
            Self::Temperature => "temperature",
            Self::Angle => "angle",
            Self::CurrentMks => "current_mks",
        }
    }
}

impl fmt::Display for BaseDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exponents over the [`BaseDimension`]s.
///
/// Exponents are stored in halves so that `sqrt` of an even power and the
/// Gaussian electromagnetic dimensions are exact. Two values compare equal
/// iff every exponent matches, which makes `Dimensions` usable as a map key
/// (see [`DimensionTable`](crate::DimensionTable)).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    halves: [i16; 6],
}

impl Dimensions {
    /// All exponents zero.
    pub const DIMENSIONLESS: Self = Self { halves: [0; 6] };
    /// Mass.
    pub const MASS: Self = Self::base(BaseDimension::Mass);
    /// Length.
    pub const LENGTH: Self = Self::base(BaseDimension::Length);
    /// Time.
    pub const TIME: Self = Self::base(BaseDimension::Time);
    /// Temperature.
    pub const TEMPERATURE: Self = Self::base(BaseDimension::Temperature);
    /// Plane angle.
    pub const ANGLE: Self = Self::base(BaseDimension::Angle);
    /// SI electric current.
    pub const CURRENT_MKS: Self = Self::base(BaseDimension::CurrentMks);

    /// length / time
    pub const VELOCITY: Self = Self::LENGTH.divide(Self::TIME);
    /// mass / length³
    pub const DENSITY: Self = Self::MASS.divide(Self::LENGTH.powi(3));
    /// mass · length² / time²
    pub const ENERGY: Self = Self::MASS
        .multiply(Self::LENGTH.powi(2))
        .divide(Self::TIME.powi(2));
    /// energy / length³
    pub const PRESSURE: Self = Self::ENERGY.divide(Self::LENGTH.powi(3));
    /// Gaussian magnetic field: pressure^1/2.
    pub const MAGNETIC_FIELD_CGS: Self = Self::PRESSURE.half();
    /// SI magnetic field: mass / (time² · current).
    pub const MAGNETIC_FIELD_MKS: Self = Self::MASS
        .divide(Self::TIME.powi(2))
        .divide(Self::CURRENT_MKS);
    /// Gaussian charge: (energy · length)^1/2.
    pub const CHARGE_CGS: Self = Self::ENERGY.multiply(Self::LENGTH).half();
    /// Gaussian current: charge / time.
    pub const CURRENT_CGS: Self = Self::CHARGE_CGS.divide(Self::TIME);
    /// SI charge: current · time.
    pub const CHARGE_MKS: Self = Self::CURRENT_MKS.multiply(Self::TIME);

    const fn base(dim: BaseDimension) -> Self {
        let mut halves = [0; 6];
        halves[dim as usize] = 2;
        Self { halves }
    }

    /// Only valid for dimensions whose halved exponents are all even.
    const fn half(self) -> Self {
        let mut halves = self.halves;
        let mut i = 0;
        while i < 6 {
            halves[i] /= 2;
            i += 1;
        }
        Self { halves }
    }

    /// Product of two dimensions (exponents add).
    pub const fn multiply(self, other: Self) -> Self {
        let mut halves = self.halves;
        let mut i = 0;
        while i < 6 {
            halves[i] += other.halves[i];
            i += 1;
        }
        Self { halves }
    }

    /// Quotient of two dimensions (exponents subtract).
    pub const fn divide(self, other: Self) -> Self {
        let mut halves = self.halves;
        let mut i = 0;
        while i < 6 {
            halves[i] -= other.halves[i];
            i += 1;
        }
        Self { halves }
    }

    /// Integer power (exponents scale by `n`).
    pub const fn powi(self, n: i16) -> Self {
        let mut halves = self.halves;
        let mut i = 0;
        while i < 6 {
            halves[i] *= n;
            i += 1;
        }
        Self { halves }
    }

    /// Square root, or `None` if some exponent would become a quarter-power.
    pub const fn sqrt(self) -> Option<Self> {
        let mut i = 0;
        while i < 6 {
            if self.halves[i] % 2 != 0 {
                return None;
            }
            i += 1;
        }
        Some(self.half())
    }

    /// Exponent of one base dimension, in halves (`1` means `^(1/2)`).
    pub const fn exponent_halves(&self, dim: BaseDimension) -> i16 {
        self.halves[dim as usize]
    }

    /// Exponent of one base dimension as a float.
    pub fn exponent(&self, dim: BaseDimension) -> f64 {
        f64::from(self.exponent_halves(dim)) / 2.0
    }

    /// Returns `true` if the base dimension appears with a non-zero exponent.
    pub const fn involves(&self, dim: BaseDimension) -> bool {
        self.halves[dim as usize] != 0
    }

    /// Returns `true` if every exponent is zero.
    pub const fn is_dimensionless(&self) -> bool {
        let mut i = 0;
        while i < 6 {
            if self.halves[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Look up a named dimension such as `"pressure"` or `"magnetic_field_cgs"`.
    pub fn named(name: &str) -> Option<Self> {
        let dims = match name {
            "dimensionless" => Self::DIMENSIONLESS,
            "mass" => Self::MASS,
            "length" => Self::LENGTH,
            "time" => Self::TIME,
            "temperature" => Self::TEMPERATURE,
            "angle" => Self::ANGLE,
            "current_mks" => Self::CURRENT_MKS,
            "velocity" => Self::VELOCITY,
            "density" => Self::DENSITY,
            "energy" => Self::ENERGY,
            "pressure" => Self::PRESSURE,
            "magnetic_field_cgs" => Self::MAGNETIC_FIELD_CGS,
            "magnetic_field_mks" => Self::MAGNETIC_FIELD_MKS,
            "charge_cgs" => Self::CHARGE_CGS,
            "current_cgs" => Self::CURRENT_CGS,
            "charge_mks" => Self::CHARGE_MKS,
            _ => return None,
        };
        Some(dims)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::DIMENSIONLESS
    }
}

impl Mul for Dimensions {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

impl Div for Dimensions {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("1");
        }
        let mut first = true;
        for dim in BaseDimension::ALL {
            let h = self.exponent_halves(dim);
            if h == 0 {
                continue;
            }
            if !first {
                f.write_str("*")?;
            }
            first = false;
            match (h % 2 == 0, h / 2) {
                (true, 1) => write!(f, "({dim})")?,
                (true, n) => write!(f, "({dim})**({n})")?,
                (false, _) => write!(f, "({dim})**({h}/2)")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn gaussian_field_squared_is_pressure() {
        assert_eq!(
            Dimensions::MAGNETIC_FIELD_CGS.powi(2),
            Dimensions::PRESSURE
        );
        assert_eq!(Dimensions::MAGNETIC_FIELD_CGS.exponent(BaseDimension::Mass), 0.5);
        assert_eq!(
            Dimensions::MAGNETIC_FIELD_CGS.exponent(BaseDimension::Length),
            -0.5
        );
    }

    #[test]
    fn gaussian_and_si_fields_differ_structurally() {
        assert_ne!(
            Dimensions::MAGNETIC_FIELD_CGS,
            Dimensions::MAGNETIC_FIELD_MKS
        );
        assert!(Dimensions::MAGNETIC_FIELD_MKS.involves(BaseDimension::CurrentMks));
        assert!(!Dimensions::MAGNETIC_FIELD_CGS.involves(BaseDimension::CurrentMks));
    }

    #[test]
    fn current_cgs_exponents() {
        let d = Dimensions::CURRENT_CGS;
        assert_eq!(d.exponent_halves(BaseDimension::Mass), 1);
        assert_eq!(d.exponent_halves(BaseDimension::Length), 3);
        assert_eq!(d.exponent_halves(BaseDimension::Time), -4);
    }

    #[test]
    fn sqrt_rejects_quarter_powers() {
        assert!(Dimensions::MAGNETIC_FIELD_CGS.sqrt().is_none());
        assert_eq!(
            Dimensions::PRESSURE.sqrt(),
            Some(Dimensions::MAGNETIC_FIELD_CGS)
        );
    }

    #[test]
    fn named_lookup() {
        assert_eq!(Dimensions::named("pressure"), Some(Dimensions::PRESSURE));
        assert_eq!(Dimensions::named("bogus"), None);
    }

    #[test]
    fn display_formats_half_powers() {
        assert_eq!(
            Dimensions::MAGNETIC_FIELD_CGS.to_string(),
            "(mass)**(1/2)*(length)**(-1/2)*(time)**(-1)"
        );
        assert_eq!(Dimensions::DIMENSIONLESS.to_string(), "1");
        assert_eq!(Dimensions::VELOCITY.to_string(), "(length)*(time)**(-1)");
    }

    fn arb_dims() -> impl Strategy<Value = Dimensions> {
        prop::array::uniform6(-6i16..6).prop_map(|halves| Dimensions { halves })
    }

    proptest! {
        #[test]
        fn multiply_commutative(a in arb_dims(), b in arb_dims()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn divide_inverts_multiply(a in arb_dims(), b in arb_dims()) {
            prop_assert_eq!((a * b) / b, a);
        }

        #[test]
        fn sqrt_of_square_roundtrips(a in arb_dims()) {
            prop_assert_eq!(a.powi(2).sqrt(), Some(a));
        }

        #[test]
        fn self_quotient_is_dimensionless(a in arb_dims()) {
            prop_assert!((a / a).is_dimensionless());
        }
    }
}
