//! Cross-convention conversions between Gaussian and SI electromagnetic units.
//!
//! Gaussian and SI electromagnetism differ in dimensional structure, not just
//! scale: a gauss is `g^1/2 cm^-1/2 s^-1` while a tesla is `kg A^-1 s^-2`.
//! No plain rescale relates them. An [`Equivalence`] names the direction of
//! a conversion and supplies the proportionality between reference units of
//! each convention.

use std::fmt;
use std::str::FromStr;

use crate::constants::SPEED_OF_LIGHT_CGS;
use crate::error::UnitError;
use crate::quantity::Quantity;
use crate::unit::Unit;

/// Direction of a Gaussian ↔ SI conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Equivalence {
    /// Convert Gaussian quantities into SI ones (`"SI"`).
    Si,
    /// Convert SI quantities into Gaussian ones (`"CGS"`).
    Cgs,
}

impl Equivalence {
    /// Canonical name: `"SI"` or `"CGS"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Si => "SI",
            Self::Cgs => "CGS",
        }
    }

    /// The opposite direction.
    pub const fn inverse(self) -> Self {
        match self {
            Self::Si => Self::Cgs,
            Self::Cgs => Self::Si,
        }
    }
}

impl fmt::Display for Equivalence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Equivalence {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SI" | "si" | "MKS" | "mks" => Ok(Self::Si),
            "CGS" | "cgs" => Ok(Self::Cgs),
            _ => Err(UnitError::UnknownEquivalence {
                name: s.to_string(),
            }),
        }
    }
}

/// One Gaussian reference unit, its SI counterpart, and how many SI
/// reference units one Gaussian reference unit is worth.
struct Pair {
    cgs: Unit,
    mks: Unit,
    mks_per_cgs: f64,
}

fn pairs() -> [Pair; 4] {
    let statamp_in_amp = 10.0 / SPEED_OF_LIGHT_CGS;
    [
        Pair {
            cgs: Unit::GAUSS,
            mks: Unit::TESLA,
            mks_per_cgs: 1.0e-4,
        },
        Pair {
            cgs: Unit::STATAMPERE,
            mks: Unit::AMPERE,
            mks_per_cgs: statamp_in_amp,
        },
        Pair {
            cgs: Unit::STATAMPERE.divide(&Unit::CENTIMETER.powi(2)),
            mks: Unit::AMPERE.divide(&Unit::METER.powi(2)),
            mks_per_cgs: statamp_in_amp * 1.0e4,
        },
        Pair {
            cgs: Unit::STATCOULOMB,
            mks: Unit::COULOMB,
            mks_per_cgs: statamp_in_amp,
        },
    ]
}

pub(crate) fn convert(
    value: &Quantity,
    to: &Unit,
    equivalence: Equivalence,
) -> Result<Quantity, UnitError> {
    if value.units().same_dimensions(to) {
        return value.in_units(to);
    }
    let from_dims = value.dims();
    let to_dims = to.dims();
    for pair in pairs() {
        let (src, dst, factor) = match equivalence {
            Equivalence::Si => (&pair.cgs, &pair.mks, pair.mks_per_cgs),
            Equivalence::Cgs => (&pair.mks, &pair.cgs, 1.0 / pair.mks_per_cgs),
        };
        if src.dims() == from_dims && dst.dims() == to_dims {
            let reference = value.in_units(src)? * factor;
            return reference.with_units(dst.clone()).into_units(to);
        }
    }
    Err(UnitError::NoEquivalence {
        from: from_dims,
        to: to_dims,
        equivalence: equivalence.name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn gauss_to_tesla() {
        let b = Quantity::scalar(1.0e4, Unit::GAUSS);
        let t = b.to_equivalent(&Unit::TESLA, Equivalence::Si).unwrap();
        assert_eq!(t.units(), &Unit::TESLA);
        assert_relative_eq!(t.value().unwrap(), 1.0, max_relative = 1e-12);
    }

    #[test]
    fn tesla_to_gauss() {
        let t = Quantity::scalar(2.5, Unit::TESLA);
        let g = t.to_equivalent(&Unit::GAUSS, Equivalence::Cgs).unwrap();
        assert_relative_eq!(g.value().unwrap(), 2.5e4, max_relative = 1e-12);
    }

    #[test]
    fn ampere_to_statampere() {
        let a = Quantity::scalar(1.0, Unit::AMPERE);
        let s = a.to_equivalent(&Unit::STATAMPERE, Equivalence::Cgs).unwrap();
        assert_relative_eq!(s.value().unwrap(), 2.99792458e9, max_relative = 1e-12);
    }

    #[test]
    fn wrong_direction_is_rejected() {
        let b = Quantity::scalar(1.0, Unit::GAUSS);
        assert!(matches!(
            b.to_equivalent(&Unit::TESLA, Equivalence::Cgs),
            Err(UnitError::NoEquivalence { equivalence: "CGS", .. })
        ));
    }

    #[test]
    fn unrelated_dimensions_are_rejected() {
        let b = Quantity::scalar(1.0, Unit::GAUSS);
        assert!(b.to_equivalent(&Unit::PASCAL, Equivalence::Si).is_err());
    }

    #[test]
    fn same_dimensions_fall_back_to_rescale() {
        let b = Quantity::scalar(1.0, Unit::TESLA);
        let mt = Unit::new("mT", crate::Dimensions::MAGNETIC_FIELD_MKS, 1.0);
        let v = b.to_equivalent(&mt, Equivalence::Si).unwrap();
        assert_relative_eq!(v.value().unwrap(), 1000.0);
    }

    #[test]
    fn parse_names() {
        assert_eq!("SI".parse::<Equivalence>().unwrap(), Equivalence::Si);
        assert_eq!("CGS".parse::<Equivalence>().unwrap(), Equivalence::Cgs);
        assert!("gaussian".parse::<Equivalence>().is_err());
        assert_eq!(Equivalence::Si.inverse(), Equivalence::Cgs);
    }
}
