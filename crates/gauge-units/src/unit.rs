//! The [`Unit`] type and common unit constants.

use std::borrow::Cow;
use std::fmt;

use crate::dimensions::Dimensions;
use crate::error::UnitError;

/// A physical unit: dimensions, a scale factor, and a display symbol.
///
/// The scale is relative to the coherent Gaussian unit of the same
/// dimensions (g, cm, s, K, rad, plus the ampere for SI current). For
/// example `METER` has scale `100.0` and `TESLA` has scale `1000.0`
/// (kg / (A·s²) expressed in g / (A·s²)).
///
/// Equality compares dimensions and scale; the symbol is presentation only.
#[derive(Clone, Debug)]
pub struct Unit {
    dims: Dimensions,
    scale: f64,
    symbol: Cow<'static, str>,
}

impl Unit {
    /// The dimensionless unit with scale 1.
    pub const DIMENSIONLESS: Unit = Unit::from_static("dimensionless", Dimensions::DIMENSIONLESS, 1.0);

    /// Gram.
    pub const GRAM: Unit = Unit::from_static("g", Dimensions::MASS, 1.0);
    /// Kilogram.
    pub const KILOGRAM: Unit = Unit::from_static("kg", Dimensions::MASS, 1000.0);
    /// Centimeter.
    pub const CENTIMETER: Unit = Unit::from_static("cm", Dimensions::LENGTH, 1.0);
    /// Meter.
    pub const METER: Unit = Unit::from_static("m", Dimensions::LENGTH, 100.0);
    /// Kilometer.
    pub const KILOMETER: Unit = Unit::from_static("km", Dimensions::LENGTH, 1.0e5);
    /// Second.
    pub const SECOND: Unit = Unit::from_static("s", Dimensions::TIME, 1.0);
    /// Kelvin.
    pub const KELVIN: Unit = Unit::from_static("K", Dimensions::TEMPERATURE, 1.0);
    /// Radian.
    pub const RADIAN: Unit = Unit::from_static("rad", Dimensions::ANGLE, 1.0);
    /// Ampere.
    pub const AMPERE: Unit = Unit::from_static("A", Dimensions::CURRENT_MKS, 1.0);

    /// Centimeters per second.
    pub const CM_PER_S: Unit = Unit::from_static("cm/s", Dimensions::VELOCITY, 1.0);
    /// Meters per second.
    pub const M_PER_S: Unit = Unit::from_static("m/s", Dimensions::VELOCITY, 100.0);
    /// Grams per cubic centimeter.
    pub const G_PER_CM3: Unit = Unit::from_static("g/cm**3", Dimensions::DENSITY, 1.0);
    /// Kilograms per cubic meter.
    pub const KG_PER_M3: Unit = Unit::from_static("kg/m**3", Dimensions::DENSITY, 1.0e-3);
    /// Barye (dyn/cm²), the Gaussian pressure unit.
    pub const BARYE: Unit = Unit::from_static("dyn/cm**2", Dimensions::PRESSURE, 1.0);
    /// Pascal.
    pub const PASCAL: Unit = Unit::from_static("Pa", Dimensions::PRESSURE, 10.0);
    /// Erg.
    pub const ERG: Unit = Unit::from_static("erg", Dimensions::ENERGY, 1.0);
    /// Joule.
    pub const JOULE: Unit = Unit::from_static("J", Dimensions::ENERGY, 1.0e7);

    /// Gauss, the Gaussian magnetic field unit.
    pub const GAUSS: Unit = Unit::from_static("G", Dimensions::MAGNETIC_FIELD_CGS, 1.0);
    /// Tesla, the SI magnetic field unit.
    pub const TESLA: Unit = Unit::from_static("T", Dimensions::MAGNETIC_FIELD_MKS, 1000.0);
    /// Statampere, the Gaussian current unit.
    pub const STATAMPERE: Unit = Unit::from_static("statA", Dimensions::CURRENT_CGS, 1.0);
    /// Statcoulomb, the Gaussian charge unit.
    pub const STATCOULOMB: Unit = Unit::from_static("statC", Dimensions::CHARGE_CGS, 1.0);
    /// Coulomb.
    pub const COULOMB: Unit = Unit::from_static("C", Dimensions::CHARGE_MKS, 1.0);

    /// Construct a unit with a `'static` symbol (usable in `const` items).
    pub const fn from_static(symbol: &'static str, dims: Dimensions, scale: f64) -> Self {
        Self {
            dims,
            scale,
            symbol: Cow::Borrowed(symbol),
        }
    }

    /// Construct a unit with an arbitrary symbol.
    pub fn new(symbol: impl Into<Cow<'static, str>>, dims: Dimensions, scale: f64) -> Self {
        Self {
            dims,
            scale,
            symbol: symbol.into(),
        }
    }

    /// Dimensions of this unit.
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Scale relative to the coherent Gaussian unit of the same dimensions.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Display symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Same unit under a different display symbol.
    pub fn with_symbol(mut self, symbol: impl Into<Cow<'static, str>>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Returns `true` if the unit has no dimensions (its scale may differ from 1).
    pub fn is_dimensionless(&self) -> bool {
        self.dims.is_dimensionless()
    }

    /// Returns `true` if both units measure the same dimensions.
    pub fn same_dimensions(&self, other: &Unit) -> bool {
        self.dims == other.dims
    }

    /// Factor `f` such that `x [self] == x * f [to]`.
    pub fn conversion_factor(&self, to: &Unit) -> Result<f64, UnitError> {
        if self.dims != to.dims {
            return Err(UnitError::IncompatibleDimensions {
                from: self.dims,
                to: to.dims,
            });
        }
        Ok(self.scale / to.scale)
    }

    /// Product unit.
    pub fn multiply(&self, other: &Unit) -> Unit {
        if self.is_unity() {
            return other.clone();
        }
        if other.is_unity() {
            return self.clone();
        }
        Unit::new(
            format!("{}*{}", self.symbol, other.symbol),
            self.dims * other.dims,
            self.scale * other.scale,
        )
    }

    /// Quotient unit.
    pub fn divide(&self, other: &Unit) -> Unit {
        if other.is_unity() {
            return self.clone();
        }
        let numerator = if self.is_unity() {
            "1"
        } else {
            self.symbol.as_ref()
        };
        Unit::new(
            format!("{numerator}/{}", wrap(&other.symbol)),
            self.dims / other.dims,
            self.scale / other.scale,
        )
    }

    /// Integer power.
    pub fn powi(&self, n: i32) -> Unit {
        match n {
            0 => Unit::DIMENSIONLESS,
            1 => self.clone(),
            _ => Unit::new(
                format!("{}**{n}", wrap(&self.symbol)),
                self.dims.powi(n as i16),
                self.scale.powi(n),
            ),
        }
    }

    /// Square root; fails if an exponent would become a quarter-power.
    pub fn sqrt(&self) -> Result<Unit, UnitError> {
        let dims = self
            .dims
            .sqrt()
            .ok_or(UnitError::FractionalExponent { dims: self.dims })?;
        Ok(Unit::new(
            format!("{}**(1/2)", wrap(&self.symbol)),
            dims,
            self.scale.sqrt(),
        ))
    }

    fn is_unity(&self) -> bool {
        self.dims.is_dimensionless() && self.scale == 1.0
    }
}

/// Parenthesise compound symbols before applying an operator to them.
fn wrap(symbol: &str) -> Cow<'_, str> {
    if symbol.contains(|c: char| c == '*' || c == '/') {
        Cow::Owned(format!("({symbol})"))
    } else {
        Cow::Borrowed(symbol)
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.dims == other.dims && self.scale == other.scale
    }
}

impl Default for Unit {
    fn default() -> Self {
        Unit::DIMENSIONLESS
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}
