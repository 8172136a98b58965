//! The per-dataset [`FieldRegistry`].

use gauge_core::{DatasetInfo, FieldAccessor, FieldError, FieldName};
use gauge_units::{Quantity, Unit};
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::context::EvalContext;
use crate::descriptor::FieldDescriptor;

/// Mapping from field name to descriptor for one dataset.
///
/// Populated during a single-threaded setup phase and read-only
/// afterwards. Evaluation never mutates the registry, so a populated
/// registry can be shared across threads, each evaluating its own chunks.
///
/// # Examples
///
/// ```
/// use gauge_core::{DatasetInfo, FieldName, Geometry};
/// use gauge_registry::FieldRegistry;
/// use gauge_units::{Unit, UnitSystem};
///
/// let mut reg = FieldRegistry::new(DatasetInfo::new(Geometry::Cartesian, UnitSystem::cgs()));
/// let rho = FieldName::new("gas", "density");
/// assert!(!reg.has(&rho));
/// reg.add_primitive(rho.clone(), Unit::G_PER_CM3);
/// assert!(reg.has(&rho));
/// assert_eq!(reg.get_descriptor(&rho).unwrap().units(), &Unit::G_PER_CM3);
/// ```
#[derive(Debug)]
pub struct FieldRegistry {
    dataset: DatasetInfo,
    fields: IndexMap<FieldName, FieldDescriptor>,
}

impl FieldRegistry {
    /// An empty registry bound to a dataset.
    pub fn new(dataset: DatasetInfo) -> Self {
        Self {
            dataset,
            fields: IndexMap::new(),
        }
    }

    /// Metadata of the dataset this registry serves.
    pub fn dataset(&self) -> &DatasetInfo {
        &self.dataset
    }

    /// Whether a descriptor is installed under `field`. Never evaluates.
    pub fn has(&self, field: &FieldName) -> bool {
        self.fields.contains_key(field)
    }

    /// The descriptor installed under `field`.
    pub fn get_descriptor(&self, field: &FieldName) -> Result<&FieldDescriptor, FieldError> {
        self.fields.get(field).ok_or_else(|| FieldError::NotFound {
            field: field.clone(),
        })
    }

    /// Install a descriptor under its own name, replacing any existing one.
    ///
    /// Returns the replaced descriptor.
    pub fn install(&mut self, descriptor: FieldDescriptor) -> Option<FieldDescriptor> {
        let name = descriptor.name().clone();
        let provenance = descriptor.provenance().to_string();
        let previous = self.fields.insert(name.clone(), descriptor);
        debug!(
            field = %name,
            provenance = %provenance,
            replaced = previous.is_some(),
            "field installed"
        );
        previous
    }

    /// Register a field read directly from chunks.
    pub fn add_primitive(&mut self, field: FieldName, units: Unit) -> Option<FieldDescriptor> {
        self.install(FieldDescriptor::primitive(field, units))
    }

    /// Evaluate a field on one chunk.
    ///
    /// Order of checks: the name must be registered
    /// ([`FieldError::NotFound`]), the descriptor must have a function
    /// ([`FieldError::UndefinedForGeometry`]), and every validator must
    /// pass ([`FieldError::PreconditionFailed`], first failure). The
    /// result is then converted to the descriptor's unit.
    ///
    /// Nothing is cached; each call allocates fresh arrays.
    pub fn evaluate(
        &self,
        field: &FieldName,
        accessor: &dyn FieldAccessor,
    ) -> Result<Quantity, FieldError> {
        EvalContext::new(self, accessor).evaluate(field)
    }

    pub(crate) fn evaluate_in(
        &self,
        field: &FieldName,
        ctx: &EvalContext<'_>,
    ) -> Result<Quantity, FieldError> {
        let descriptor = self.get_descriptor(field)?;
        let function = descriptor
            .function()
            .ok_or_else(|| FieldError::UndefinedForGeometry {
                field: field.clone(),
                geometry: self.dataset.geometry(),
            })?;
        for validator in descriptor.validators() {
            validator
                .check(self, ctx.accessor())
                .map_err(|reason| FieldError::PreconditionFailed {
                    field: field.clone(),
                    validator: format!("{validator}: {reason}"),
                })?;
        }

        trace!(field = %field, depth = ctx.depth(), "evaluating field");
        let value = function(descriptor, ctx)?;
        Ok(value.into_units(descriptor.units())?)
    }

    /// Number of installed descriptors.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if nothing is installed.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Descriptors in installation order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    /// Installed names in installation order.
    pub fn names(&self) -> impl Iterator<Item = &FieldName> {
        self.fields.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_core::{FieldParameter, Geometry};
    use gauge_test_utils::MockChunk;
    use gauge_units::UnitSystem;

    use crate::validator::Validator;

    fn registry() -> FieldRegistry {
        FieldRegistry::new(DatasetInfo::new(Geometry::Cartesian, UnitSystem::cgs()))
    }

    fn density() -> FieldName {
        FieldName::new("gas", "density")
    }

    #[test]
    fn missing_field_is_not_found() {
        let reg = registry();
        let chunk = MockChunk::new(&[2]);
        assert_eq!(
            reg.evaluate(&density(), &chunk).unwrap_err(),
            FieldError::NotFound { field: density() }
        );
        assert!(reg.get_descriptor(&density()).is_err());
    }

    #[test]
    fn install_overwrites() {
        let mut reg = registry();
        assert!(reg.add_primitive(density(), Unit::G_PER_CM3).is_none());
        let old = reg.add_primitive(density(), Unit::KG_PER_M3).unwrap();
        assert_eq!(old.units(), &Unit::G_PER_CM3);
        assert_eq!(reg.len(), 1);
        assert_eq!(reg.get_descriptor(&density()).unwrap().units(), &Unit::KG_PER_M3);
    }

    #[test]
    fn result_is_converted_to_declared_units() {
        let mut reg = registry();
        reg.add_primitive(density(), Unit::KG_PER_M3);
        let chunk = MockChunk::new(&[3]).with_uniform(density(), 2.0, Unit::G_PER_CM3);
        let rho = reg.evaluate(&density(), &chunk).unwrap();
        assert_eq!(rho.units(), &Unit::KG_PER_M3);
        assert!(rho.data().iter().all(|&v| (v - 2000.0).abs() < 1e-9));
    }

    #[test]
    fn wrong_dimensions_fail_conversion() {
        let mut reg = registry();
        reg.add_primitive(density(), Unit::GAUSS);
        let chunk = MockChunk::new(&[3]).with_uniform(density(), 2.0, Unit::G_PER_CM3);
        assert!(matches!(
            reg.evaluate(&density(), &chunk),
            Err(FieldError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn undefined_is_distinct_from_missing() {
        let mut reg = registry();
        let f = FieldName::new("gas", "magnetic_field_toroidal");
        reg.install(FieldDescriptor::undefined(f.clone(), Unit::GAUSS));
        assert!(reg.has(&f));
        let chunk = MockChunk::new(&[2]);
        assert_eq!(
            reg.evaluate(&f, &chunk).unwrap_err(),
            FieldError::UndefinedForGeometry {
                field: f,
                geometry: Geometry::Cartesian,
            }
        );
    }

    #[test]
    fn first_failing_validator_is_named() {
        let mut reg = registry();
        let f = FieldName::new("gas", "needs_params");
        reg.install(
            FieldDescriptor::derived(f.clone(), Unit::DIMENSIONLESS, |_, _| {
                Ok(Quantity::scalar(1.0, Unit::DIMENSIONLESS))
            })
            .with_validator(Validator::parameter("normal"))
            .with_validator(Validator::parameter("center")),
        );

        let chunk = MockChunk::new(&[2]);
        match reg.evaluate(&f, &chunk).unwrap_err() {
            FieldError::PreconditionFailed { validator, .. } => {
                assert!(validator.contains("normal"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let chunk = chunk.with_parameter("normal", FieldParameter::Vector([0.0, 0.0, 1.0]));
        match reg.evaluate(&f, &chunk).unwrap_err() {
            FieldError::PreconditionFailed { validator, .. } => {
                assert!(validator.contains("center"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let chunk = chunk.with_parameter("center", FieldParameter::Scalar(0.0));
        assert!(reg.evaluate(&f, &chunk).is_ok());
    }

    #[test]
    fn has_does_not_evaluate() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut reg = registry();
        let f = FieldName::new("gas", "counted");
        reg.install(FieldDescriptor::derived(
            f.clone(),
            Unit::DIMENSIONLESS,
            move |_, _| {
                counter.fetch_add(1, Ordering::Relaxed);
                Ok(Quantity::scalar(0.0, Unit::DIMENSIONLESS))
            },
        ));
        assert!(reg.has(&f));
        assert!(reg.get_descriptor(&f).is_ok());
        assert_eq!(calls.load(Ordering::Relaxed), 0);

        let chunk = MockChunk::new(&[1]);
        reg.evaluate(&f, &chunk).unwrap();
        reg.evaluate(&f, &chunk).unwrap();
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FieldRegistry>();
    }
}
