//! Error type for field registration and evaluation.

use gauge_units::UnitError;
use thiserror::Error;

use crate::geometry::Geometry;
use crate::name::FieldName;

/// Errors from evaluating a field.
///
/// The registry never catches or retries: every failure reaches the
/// immediate caller. Numeric edge cases such as division by zero are not
/// errors; they surface as non-finite samples.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FieldError {
    /// The name is not in the registry and the accessor cannot supply it.
    #[error("field {field} not found")]
    NotFound {
        /// The missing field.
        field: FieldName,
    },

    /// A validator rejected the evaluation context.
    #[error("field {field}: precondition failed: {validator}")]
    PreconditionFailed {
        /// The field being evaluated.
        field: FieldName,
        /// Description of the first unmet validator.
        validator: String,
    },

    /// The field is registered but has no formula for this geometry.
    #[error("field {field} is undefined for {geometry} geometry")]
    UndefinedForGeometry {
        /// The field being evaluated.
        field: FieldName,
        /// Geometry of the dataset.
        geometry: Geometry,
    },

    /// A dimension-keyed lookup missed, or a result could not be converted
    /// to its declared unit.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(#[from] UnitError),

    /// A field requested during evaluation failed.
    #[error("dependency {field} failed")]
    PropagatedFailure {
        /// The dependency that failed.
        field: FieldName,
        /// Its error.
        #[source]
        source: Box<FieldError>,
    },

    /// A field transitively requested itself.
    #[error("cyclic dependency: {}", format_chain(.chain))]
    CyclicDependency {
        /// Fields in evaluation order, ending with the repeated one.
        chain: Vec<FieldName>,
    },

    /// Arrays combined element-wise have different shapes.
    #[error("field {field}: expected shape {expected:?}, found {found:?}")]
    ShapeMismatch {
        /// The field being evaluated.
        field: FieldName,
        /// Shape of the first input.
        expected: Vec<usize>,
        /// Shape of the offending input.
        found: Vec<usize>,
    },

    /// Input arrays do not fit the finite-difference stencil.
    #[error("field {field}: invalid stencil: {reason}")]
    InvalidStencil {
        /// The field being evaluated.
        field: FieldName,
        /// What did not fit.
        reason: String,
    },
}

impl FieldError {
    /// The innermost error, looking through any `PropagatedFailure` layers.
    pub fn root_cause(&self) -> &FieldError {
        let mut err = self;
        while let FieldError::PropagatedFailure { source, .. } = err {
            err = source;
        }
        err
    }
}

fn format_chain(chain: &[FieldName]) -> String {
    chain
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_units::Dimensions;

    #[test]
    fn root_cause_unwraps_propagation() {
        let inner = FieldError::NotFound {
            field: FieldName::new("gas", "density"),
        };
        let outer = FieldError::PropagatedFailure {
            field: FieldName::new("gas", "alfven_speed"),
            source: Box::new(FieldError::PropagatedFailure {
                field: FieldName::new("gas", "density"),
                source: Box::new(inner.clone()),
            }),
        };
        assert_eq!(outer.root_cause(), &inner);
    }

    #[test]
    fn chain_display() {
        let err = FieldError::CyclicDependency {
            chain: vec![FieldName::new("gas", "a"), FieldName::new("gas", "a")],
        };
        assert_eq!(
            err.to_string(),
            "cyclic dependency: ('gas', 'a') -> ('gas', 'a')"
        );
    }

    #[test]
    fn unit_errors_convert() {
        let err: FieldError = UnitError::NoConvention {
            dims: Dimensions::LENGTH,
        }
        .into();
        assert!(matches!(err, FieldError::DimensionMismatch(_)));
    }
}
