//! Vector magnitude fields.

use gauge_core::{FieldError, FieldName};
use gauge_registry::{EvalContext, FieldDescriptor, FieldRegistry, Validator};
use gauge_units::{Quantity, Unit};

/// `sqrt(sum of squares)` of the given components, in the first
/// component's unit.
///
/// Later components are rescaled into the first one's unit before
/// summing; components of different dimensions fail with
/// [`FieldError::DimensionMismatch`], components of different shapes with
/// [`FieldError::ShapeMismatch`].
pub fn magnitude(
    desc: &FieldDescriptor,
    ctx: &EvalContext<'_>,
    components: &[FieldName],
) -> Result<Quantity, FieldError> {
    let values = components
        .iter()
        .map(|field| ctx.get(field))
        .collect::<Result<Vec<_>, _>>()?;
    let Some((head, rest)) = values.split_first() else {
        return Err(FieldError::NotFound {
            field: FieldName::new("", ""),
        });
    };
    same_shape(desc, &values)?;

    let units = head.units().clone();
    let mut sum = head.powi(2);
    for component in rest {
        sum = sum.try_add(&component.in_units(&units)?.powi(2))?;
    }
    Ok(sum.sqrt()?)
}

/// Fail with [`FieldError::ShapeMismatch`] unless every input has the
/// first one's shape.
pub(crate) fn same_shape<'q>(
    desc: &FieldDescriptor,
    inputs: impl IntoIterator<Item = &'q Quantity>,
) -> Result<(), FieldError> {
    let mut inputs = inputs.into_iter();
    let Some(first) = inputs.next() else {
        return Ok(());
    };
    match inputs.find(|q| q.shape() != first.shape()) {
        Some(found) => Err(FieldError::ShapeMismatch {
            field: desc.name().clone(),
            expected: first.shape().to_vec(),
            found: found.shape().to_vec(),
        }),
        None => Ok(()),
    }
}

/// Install `<ftype>:<basename>_magnitude` over the components
/// `<basename>_<axis>` for the first `dimensionality` axes of the
/// dataset.
///
/// ```
/// use gauge_core::{DatasetInfo, FieldName, Geometry};
/// use gauge_fields::create_magnitude_field;
/// use gauge_registry::FieldRegistry;
/// use gauge_units::{Unit, UnitSystem};
///
/// let mut reg = FieldRegistry::new(DatasetInfo::new(Geometry::Cartesian, UnitSystem::cgs()));
/// create_magnitude_field(&mut reg, "velocity", Unit::CM_PER_S, "gas", []);
/// assert!(reg.has(&FieldName::new("gas", "velocity_magnitude")));
/// ```
pub fn create_magnitude_field(
    registry: &mut FieldRegistry,
    basename: &str,
    units: Unit,
    ftype: &str,
    validators: impl IntoIterator<Item = Validator>,
) {
    let dataset = registry.dataset();
    let components: Vec<FieldName> = dataset
        .axis_order()
        .iter()
        .take(dataset.dimensionality())
        .map(|axis| FieldName::new(ftype, format!("{basename}_{axis}")))
        .collect();

    let name = FieldName::new(ftype, format!("{basename}_magnitude"));
    registry.install(
        FieldDescriptor::derived(name, units, move |desc, ctx| {
            magnitude(desc, ctx, &components)
        })
            .with_validators(validators)
            .with_provenance("vector"),
    );
}
