//! Error type for unit algebra operations.

use thiserror::Error;

use crate::dimensions::{BaseDimension, Dimensions};

/// Errors from unit conversion, unit-system lookup and dimension dispatch.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum UnitError {
    /// A same-dimension conversion or addition was attempted across
    /// different dimensions.
    #[error("cannot convert {from} to {to}: dimensions differ")]
    IncompatibleDimensions {
        /// Dimensions of the source value.
        from: Dimensions,
        /// Dimensions of the requested target.
        to: Dimensions,
    },

    /// Element-wise arithmetic between arrays whose shapes do not
    /// broadcast together.
    #[error("shapes {left:?} and {right:?} cannot be broadcast together")]
    ShapeMismatch {
        /// Shape of the left operand.
        left: Vec<usize>,
        /// Shape of the right operand.
        right: Vec<usize>,
    },

    /// A [`DimensionTable`](crate::DimensionTable) has no entry for the
    /// dimensions of the value being dispatched on.
    #[error("no convention constant registered for dimensions {dims}")]
    NoConvention {
        /// Dimensions that were looked up.
        dims: Dimensions,
    },

    /// The equivalence does not relate the source and target dimensions.
    #[error("equivalence '{equivalence}' cannot convert {from} to {to}")]
    NoEquivalence {
        /// Dimensions of the source value.
        from: Dimensions,
        /// Dimensions of the requested target.
        to: Dimensions,
        /// Name of the equivalence (`"SI"` or `"CGS"`).
        equivalence: &'static str,
    },

    /// `sqrt` would produce a quarter-power exponent.
    #[error("square root of {dims} is not representable")]
    FractionalExponent {
        /// Dimensions whose square root was requested.
        dims: Dimensions,
    },

    /// The unit system has no base unit for a dimension the requested
    /// unit needs.
    #[error("unit system '{system}' has no base unit for {dimension}")]
    MissingBaseUnit {
        /// Name of the unit system.
        system: String,
        /// The missing base dimension.
        dimension: BaseDimension,
    },

    /// A base unit was supplied whose dimensions do not match its slot.
    #[error("'{unit}' cannot be the base unit for {dimension}")]
    InvalidBaseUnit {
        /// Slot the unit was supplied for.
        dimension: BaseDimension,
        /// Symbol of the offending unit.
        unit: String,
    },

    /// The name passed to [`UnitSystem::unit`](crate::UnitSystem::unit) is
    /// not a known derived quantity.
    #[error("unit system '{system}' has no unit named '{name}'")]
    UnknownUnitName {
        /// Name of the unit system.
        system: String,
        /// The unrecognised name.
        name: String,
    },

    /// An equivalence name other than `"SI"` or `"CGS"` was parsed.
    #[error("unknown equivalence '{name}'")]
    UnknownEquivalence {
        /// The unrecognised name.
        name: String,
    },
}
