//! The chunk-side data access trait.

use gauge_units::Quantity;

use crate::name::FieldName;

/// A value bound to an evaluation context, such as the `"normal"` vector
/// used by projections.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldParameter {
    /// A scalar.
    Scalar(f64),
    /// A three-component vector.
    Vector([f64; 3]),
}

impl FieldParameter {
    /// The vector value, if this is a vector.
    pub fn as_vector(&self) -> Option<[f64; 3]> {
        match self {
            Self::Vector(v) => Some(*v),
            Self::Scalar(_) => None,
        }
    }
}

/// Read access to one spatial chunk of a dataset.
///
/// Implemented by the grid layer that owns on-disk data. The registry asks
/// it for primitive arrays by name and for context parameters; it never
/// asks it to evaluate derived fields.
pub trait FieldAccessor {
    /// Array for a field in this chunk, or `None` if unavailable.
    fn read(&self, field: &FieldName) -> Option<&Quantity>;

    /// Whether [`read`](Self::read) would succeed.
    fn has_field(&self, field: &FieldName) -> bool {
        self.read(field).is_some()
    }

    /// A parameter bound to this access context.
    fn parameter(&self, name: &str) -> Option<&FieldParameter>;

    /// Width of the ghost-zone halo surrounding the chunk's arrays.
    ///
    /// Default: no halo.
    fn ghost_zones(&self) -> usize {
        0
    }

    /// Cell spacing along `axis`.
    ///
    /// Default: the first sample of `("index", "d<axis>")`, which is
    /// uniform across a chunk.
    fn grid_spacing(&self, axis: &str) -> Option<Quantity> {
        self.read(&FieldName::new("index", format!("d{axis}")))
            .and_then(Quantity::first)
    }
}
