//! Per-dataset metadata consulted when plugins install fields.

use gauge_units::UnitSystem;
use thiserror::Error;

use crate::geometry::{AxisOrder, Geometry};

/// Geometry, axis order, dimensionality and unit system of one dataset.
///
/// Bound once when a registry is created and read-only afterwards.
///
/// # Examples
///
/// ```
/// use gauge_core::{DatasetInfo, Geometry};
/// use gauge_units::UnitSystem;
///
/// let ds = DatasetInfo::builder()
///     .geometry(Geometry::Cylindrical)
///     .unit_system(UnitSystem::mks())
///     .build()
///     .unwrap();
/// assert_eq!(ds.axis_order().first(), Some("r"));
/// assert_eq!(ds.dimensionality(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct DatasetInfo {
    geometry: Geometry,
    axis_order: AxisOrder,
    dimensionality: usize,
    unit_system: UnitSystem,
}

/// Errors from [`DatasetInfoBuilder::build`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The axis order does not name exactly three axes.
    #[error("axis_order must name 3 axes, got {found}")]
    AxisCount {
        /// Number of axes supplied.
        found: usize,
    },
    /// Dimensionality outside `1..=3`.
    #[error("dimensionality must be 1, 2 or 3, got {found}")]
    Dimensionality {
        /// The configured dimensionality.
        found: usize,
    },
}

/// Builder for [`DatasetInfo`].
///
/// Defaults: Cartesian geometry, the geometry's default axis order,
/// three dimensions, and the Gaussian `cgs` unit system.
pub struct DatasetInfoBuilder {
    geometry: Geometry,
    axis_order: Option<AxisOrder>,
    dimensionality: usize,
    unit_system: Option<UnitSystem>,
}

impl DatasetInfo {
    /// Create a new builder.
    pub fn builder() -> DatasetInfoBuilder {
        DatasetInfoBuilder {
            geometry: Geometry::Cartesian,
            axis_order: None,
            dimensionality: 3,
            unit_system: None,
        }
    }

    /// A three-dimensional dataset with the geometry's default axis order.
    pub fn new(geometry: Geometry, unit_system: UnitSystem) -> Self {
        Self {
            geometry,
            axis_order: geometry.default_axis_order(),
            dimensionality: 3,
            unit_system,
        }
    }

    /// Coordinate geometry.
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Axis names in coordinate order.
    pub fn axis_order(&self) -> &AxisOrder {
        &self.axis_order
    }

    /// Number of spatial dimensions actually resolved (1 to 3).
    pub fn dimensionality(&self) -> usize {
        self.dimensionality
    }

    /// Active unit system.
    pub fn unit_system(&self) -> &UnitSystem {
        &self.unit_system
    }
}

impl DatasetInfoBuilder {
    /// Coordinate geometry.
    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Override the geometry's default axis order.
    pub fn axis_order(mut self, axis_order: AxisOrder) -> Self {
        self.axis_order = Some(axis_order);
        self
    }

    /// Number of spatial dimensions.
    pub fn dimensionality(mut self, dimensionality: usize) -> Self {
        self.dimensionality = dimensionality;
        self
    }

    /// Active unit system.
    pub fn unit_system(mut self, unit_system: UnitSystem) -> Self {
        self.unit_system = Some(unit_system);
        self
    }

    /// Build, checking that the axis order has three axes and the
    /// dimensionality is between 1 and 3.
    pub fn build(self) -> Result<DatasetInfo, DatasetError> {
        let axis_order = self
            .axis_order
            .unwrap_or_else(|| self.geometry.default_axis_order());
        if axis_order.len() != 3 {
            return Err(DatasetError::AxisCount {
                found: axis_order.len(),
            });
        }
        if !(1..=3).contains(&self.dimensionality) {
            return Err(DatasetError::Dimensionality {
                found: self.dimensionality,
            });
        }
        Ok(DatasetInfo {
            geometry: self.geometry,
            axis_order,
            dimensionality: self.dimensionality,
            unit_system: self.unit_system.unwrap_or_else(UnitSystem::cgs),
        })
    }
}
