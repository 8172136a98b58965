//! Unit systems: base units plus named derived units.

use indexmap::IndexMap;

use crate::dimensions::{BaseDimension, Dimensions};
use crate::error::UnitError;
use crate::unit::Unit;

/// A set of base units from which every derived unit is composed.
///
/// Whether a system is SI-like or Gaussian-like is decided by its base
/// units alone: a system with a base unit for
/// [`BaseDimension::CurrentMks`] is SI-like (see
/// [`is_mks_like`](Self::is_mks_like)).
///
/// # Examples
///
/// ```
/// use gauge_units::{Unit, UnitSystem};
///
/// let cgs = UnitSystem::cgs();
/// assert!(!cgs.is_mks_like());
/// assert_eq!(cgs.unit("magnetic_field_cgs").unwrap(), Unit::GAUSS);
///
/// let mks = UnitSystem::mks();
/// assert!(mks.is_mks_like());
/// assert_eq!(mks.unit("pressure").unwrap(), Unit::PASCAL);
/// ```
#[derive(Clone, Debug)]
pub struct UnitSystem {
    name: String,
    base_units: IndexMap<BaseDimension, Unit>,
    overrides: IndexMap<Dimensions, Unit>,
}

impl UnitSystem {
    /// Start an empty system. Base units are added with
    /// [`with_base_unit`](Self::with_base_unit).
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_units: IndexMap::new(),
            overrides: IndexMap::new(),
        }
    }

    /// Gaussian system: g, cm, s, K, rad; no current base unit.
    pub fn cgs() -> Self {
        let base = [
            (BaseDimension::Mass, Unit::GRAM),
            (BaseDimension::Length, Unit::CENTIMETER),
            (BaseDimension::Time, Unit::SECOND),
            (BaseDimension::Temperature, Unit::KELVIN),
            (BaseDimension::Angle, Unit::RADIAN),
        ];
        let mut system = Self::new("cgs");
        system.base_units.extend(base);
        system
            .with_override(Unit::GAUSS)
            .with_override(Unit::STATAMPERE)
            .with_override(Unit::STATCOULOMB)
            .with_override(Unit::BARYE)
            .with_override(Unit::ERG)
            .with_override(Unit::CM_PER_S)
            .with_override(Unit::G_PER_CM3)
    }

    /// SI system: kg, m, s, K, rad, A.
    pub fn mks() -> Self {
        let base = [
            (BaseDimension::Mass, Unit::KILOGRAM),
            (BaseDimension::Length, Unit::METER),
            (BaseDimension::Time, Unit::SECOND),
            (BaseDimension::Temperature, Unit::KELVIN),
            (BaseDimension::Angle, Unit::RADIAN),
            (BaseDimension::CurrentMks, Unit::AMPERE),
        ];
        let mut system = Self::new("mks");
        system.base_units.extend(base);
        system
            .with_override(Unit::TESLA)
            .with_override(Unit::COULOMB)
            .with_override(Unit::PASCAL)
            .with_override(Unit::JOULE)
            .with_override(Unit::M_PER_S)
            .with_override(Unit::KG_PER_M3)
    }

    /// Add or replace the base unit for one dimension.
    ///
    /// Fails if `unit` does not measure exactly that base dimension.
    pub fn with_base_unit(mut self, dim: BaseDimension, unit: Unit) -> Result<Self, UnitError> {
        let expected = match dim {
            BaseDimension::Mass => Dimensions::MASS,
            BaseDimension::Length => Dimensions::LENGTH,
            BaseDimension::Time => Dimensions::TIME,
            BaseDimension::Temperature => Dimensions::TEMPERATURE,
            BaseDimension::Angle => Dimensions::ANGLE,
            BaseDimension::CurrentMks => Dimensions::CURRENT_MKS,
        };
        if unit.dims() != expected {
            return Err(UnitError::InvalidBaseUnit {
                dimension: dim,
                unit: unit.symbol().to_string(),
            });
        }
        self.base_units.insert(dim, unit);
        Ok(self)
    }

    /// Prefer `unit` (and its symbol) whenever its dimensions are requested.
    pub fn with_override(mut self, unit: Unit) -> Self {
        self.overrides.insert(unit.dims(), unit);
        self
    }

    /// System name, e.g. `"cgs"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Base units in insertion order.
    pub fn base_units(&self) -> impl Iterator<Item = (BaseDimension, &Unit)> {
        self.base_units.iter().map(|(d, u)| (*d, u))
    }

    /// Returns `true` if the system has a base unit for `dim`.
    pub fn has_base(&self, dim: BaseDimension) -> bool {
        self.base_units.contains_key(&dim)
    }

    /// SI-like iff electric current is a base dimension.
    pub fn is_mks_like(&self) -> bool {
        self.has_base(BaseDimension::CurrentMks)
    }

    /// The system's unit for a named quantity (`"pressure"`,
    /// `"magnetic_field_mks"`, `"length"`, ...).
    pub fn unit(&self, name: &str) -> Result<Unit, UnitError> {
        let dims = Dimensions::named(name).ok_or_else(|| UnitError::UnknownUnitName {
            system: self.name.clone(),
            name: name.to_string(),
        })?;
        self.unit_for(dims)
    }

    /// The system's unit for arbitrary dimensions.
    ///
    /// Returns an override if one is registered for `dims`, otherwise the
    /// product of base units raised to the required exponents.
    pub fn unit_for(&self, dims: Dimensions) -> Result<Unit, UnitError> {
        if let Some(unit) = self.overrides.get(&dims) {
            return Ok(unit.clone());
        }
        if dims.is_dimensionless() {
            return Ok(Unit::DIMENSIONLESS);
        }

        let mut numerator = 1.0;
        let mut denominator = 1.0;
        let mut symbol = String::new();
        for dim in BaseDimension::ALL {
            let halves = dims.exponent_halves(dim);
            if halves == 0 {
                continue;
            }
            let base = self
                .base_units
                .get(&dim)
                .ok_or_else(|| UnitError::MissingBaseUnit {
                    system: self.name.clone(),
                    dimension: dim,
                })?;
            let magnitude = scale_pow(base.scale(), halves.unsigned_abs());
            if halves > 0 {
                numerator *= magnitude;
            } else {
                denominator *= magnitude;
            }
            if !symbol.is_empty() {
                symbol.push('*');
            }
            symbol.push_str(&power_symbol(base.symbol(), halves));
        }
        Ok(Unit::new(symbol, dims, numerator / denominator))
    }
}

/// `scale^(halves / 2)` with exact integer powers where possible.
fn scale_pow(scale: f64, halves: u16) -> f64 {
    let whole = scale.powi(i32::from(halves / 2));
    if halves % 2 == 1 {
        whole * scale.sqrt()
    } else {
        whole
    }
}

fn power_symbol(symbol: &str, halves: i16) -> String {
    match (halves % 2 == 0, halves / 2) {
        (true, 1) => symbol.to_string(),
        (true, n) => format!("{symbol}**{n}"),
        (false, _) => format!("{symbol}**({halves}/2)"),
    }
}
