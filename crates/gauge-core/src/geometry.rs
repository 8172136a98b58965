//! Coordinate geometries, axis orders and sampling disciplines.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

/// Coordinate geometry of a dataset.
///
/// Plugins inspect the geometry once, at install time, to choose between
/// formulas that produce the same named quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Geometry {
    /// `(x, y, z)`.
    Cartesian,
    /// `(r, z, theta)`.
    Cylindrical,
    /// `(r, theta, z)`.
    Polar,
    /// `(r, theta, phi)`.
    Spherical,
    /// `(latitude, longitude, altitude)`.
    Geographic,
    /// Position-position-velocity cubes, `(x, y, z)`.
    SpectralCube,
}

impl Geometry {
    /// Lower-case geometry name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Cartesian => "cartesian",
            Self::Cylindrical => "cylindrical",
            Self::Polar => "polar",
            Self::Spherical => "spherical",
            Self::Geographic => "geographic",
            Self::SpectralCube => "spectral_cube",
        }
    }

    /// Axis names in the order the geometry's coordinate handler uses.
    pub fn default_axis_order(self) -> AxisOrder {
        let axes = match self {
            Self::Cartesian | Self::SpectralCube => ["x", "y", "z"],
            Self::Cylindrical => ["r", "z", "theta"],
            Self::Polar => ["r", "theta", "z"],
            Self::Spherical => ["r", "theta", "phi"],
            Self::Geographic => ["latitude", "longitude", "altitude"],
        };
        AxisOrder::from(axes)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Geometry {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cartesian" => Ok(Self::Cartesian),
            "cylindrical" => Ok(Self::Cylindrical),
            "polar" => Ok(Self::Polar),
            "spherical" => Ok(Self::Spherical),
            "geographic" => Ok(Self::Geographic),
            "spectral_cube" => Ok(Self::SpectralCube),
            other => Err(format!("unknown geometry '{other}'")),
        }
    }
}

/// Ordered axis names of a dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisOrder {
    axes: SmallVec<[String; 3]>,
}

impl AxisOrder {
    /// Build from any sequence of axis names.
    pub fn new<I, S>(axes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            axes: axes.into_iter().map(Into::into).collect(),
        }
    }

    /// First axis, the one plugins probe to decide whether a vector family
    /// exists at all.
    pub fn first(&self) -> Option<&str> {
        self.axes.first().map(String::as_str)
    }

    /// Axis at position `i`.
    pub fn get(&self, i: usize) -> Option<&str> {
        self.axes.get(i).map(String::as_str)
    }

    /// Number of axes.
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    /// Returns `true` if no axes are declared.
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Axis names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.axes.iter().map(String::as_str)
    }
}

impl From<[&str; 3]> for AxisOrder {
    fn from(axes: [&str; 3]) -> Self {
        Self::new(axes)
    }
}

/// How a field is sampled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sampling {
    /// One value per grid cell.
    #[default]
    Cell,
    /// One value per particle.
    Particle,
    /// Values local to the requesting object, not tied to the grid.
    Local,
}
