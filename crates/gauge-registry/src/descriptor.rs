//! The [`FieldDescriptor`] registry entry.

use std::fmt;
use std::sync::Arc;

use gauge_core::{FieldError, FieldName, Sampling};
use gauge_units::{Quantity, Unit};
use smallvec::SmallVec;

use crate::context::EvalContext;
use crate::validator::Validator;

/// Computation rule of a derived field.
///
/// Receives its own descriptor and the evaluation context. Must be
/// `Send + Sync` so a populated registry can be shared across threads.
pub type FieldFunction =
    Arc<dyn Fn(&FieldDescriptor, &EvalContext<'_>) -> Result<Quantity, FieldError> + Send + Sync>;

/// Registry entry for one field.
///
/// Fields are private and there are no setters: once installed, a
/// descriptor is immutable. Re-installing under the same name replaces it
/// wholesale.
///
/// # Examples
///
/// ```
/// use gauge_core::FieldName;
/// use gauge_registry::{FieldDescriptor, Validator};
/// use gauge_units::Unit;
///
/// let d = FieldDescriptor::derived(
///     FieldName::new("gas", "twice_density"),
///     Unit::G_PER_CM3,
///     |_, ctx| Ok(ctx.get(&FieldName::new("gas", "density"))? * 2.0),
/// )
/// .with_validator(Validator::parameter("normal"))
/// .with_provenance("example");
/// assert!(d.function().is_some());
/// assert_eq!(d.validators().len(), 1);
/// ```
#[derive(Clone)]
pub struct FieldDescriptor {
    name: FieldName,
    function: Option<FieldFunction>,
    units: Unit,
    sampling: Sampling,
    validators: SmallVec<[Validator; 2]>,
    provenance: String,
}

impl FieldDescriptor {
    /// A derived field computed by `function`.
    pub fn derived<F>(name: FieldName, units: Unit, function: F) -> Self
    where
        F: Fn(&FieldDescriptor, &EvalContext<'_>) -> Result<Quantity, FieldError>
            + Send
            + Sync
            + 'static,
    {
        Self::with_function(name, units, Some(Arc::new(function)))
    }

    /// A field with no formula for the dataset's geometry. Evaluating it
    /// fails with [`FieldError::UndefinedForGeometry`].
    pub fn undefined(name: FieldName, units: Unit) -> Self {
        Self::with_function(name, units, None)
    }

    /// A field read directly from the chunk.
    pub fn primitive(name: FieldName, units: Unit) -> Self {
        Self::derived(name, units, |desc, ctx| ctx.read_primitive(desc.name()))
            .with_provenance("primitive")
    }

    /// A field built from an already shared function, or none.
    pub fn with_function(name: FieldName, units: Unit, function: Option<FieldFunction>) -> Self {
        Self {
            name,
            function,
            units,
            sampling: Sampling::Cell,
            validators: SmallVec::new(),
            provenance: String::new(),
        }
    }

    /// Append a validator.
    pub fn with_validator(mut self, validator: Validator) -> Self {
        self.validators.push(validator);
        self
    }

    /// Append several validators in order.
    pub fn with_validators(mut self, validators: impl IntoIterator<Item = Validator>) -> Self {
        self.validators.extend(validators);
        self
    }

    /// Set the sampling discipline (default: per cell).
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Record which plugin built the descriptor.
    pub fn with_provenance(mut self, provenance: impl Into<String>) -> Self {
        self.provenance = provenance.into();
        self
    }

    /// Field name.
    pub fn name(&self) -> &FieldName {
        &self.name
    }

    /// Computation rule, or `None` if undefined for the geometry.
    pub fn function(&self) -> Option<&FieldFunction> {
        self.function.as_ref()
    }

    /// Unit every evaluation result is converted to.
    pub fn units(&self) -> &Unit {
        &self.units
    }

    /// Sampling discipline.
    pub fn sampling(&self) -> Sampling {
        self.sampling
    }

    /// Validators, checked in order before evaluation.
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Plugin that installed the descriptor, or empty.
    pub fn provenance(&self) -> &str {
        &self.provenance
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("name", &self.name)
            .field("defined", &self.function.is_some())
            .field("units", &self.units.symbol())
            .field("sampling", &self.sampling)
            .field("validators", &self.validators)
            .field("provenance", &self.provenance)
            .finish()
    }
}
