//! Aliases from frontend-specific magnetic fields to the canonical names.
//!
//! Frontends store magnetic field components under their own names and in
//! whatever convention the simulation code used. The aliases expose them as
//! `<ftype>:magnetic_field_<axis>` in the dataset's unit system, so the
//! rest of the magnetic family sees one consistent input.

use gauge_core::FieldName;
use gauge_registry::{FieldDescriptor, FieldRegistry};
use gauge_units::{Equivalence, Quantity, Unit, UnitError};
use tracing::debug;

/// How aliased values reach the canonical unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conversion {
    /// Same dimensions: plain rescale.
    Rescale,
    /// Different conventions: cross-convention equivalence.
    Equivalent(Equivalence),
}

impl Conversion {
    /// Conversion from `from` into the system's magnetic field unit `to`.
    pub fn between(from: &Unit, to: &Unit, mks_like: bool) -> Self {
        if from.same_dimensions(to) {
            Self::Rescale
        } else if mks_like {
            Self::Equivalent(Equivalence::Si)
        } else {
            Self::Equivalent(Equivalence::Cgs)
        }
    }

    /// Apply the conversion.
    pub fn apply(self, value: &Quantity, to: &Unit) -> Result<Quantity, UnitError> {
        match self {
            Self::Rescale => value.in_units(to),
            Self::Equivalent(equivalence) => value.to_equivalent(to, equivalence),
        }
    }
}

/// Alias `<ds_ftype>:<ds_fields[i]>` as `<ftype>:magnetic_field_<axis_i>`,
/// pairing fields with the dataset's axis order.
///
/// Does nothing if the first source field is not registered. The target
/// unit and conversion are fixed here, from the source field's unit and
/// whether the dataset's unit system is SI-like.
///
/// ```
/// use gauge_core::{DatasetInfo, FieldName, Geometry};
/// use gauge_fields::setup_magnetic_field_aliases;
/// use gauge_registry::FieldRegistry;
/// use gauge_units::{Unit, UnitSystem};
///
/// let mut reg = FieldRegistry::new(DatasetInfo::new(Geometry::Cartesian, UnitSystem::mks()));
/// for f in ["Bx", "By", "Bz"] {
///     reg.add_primitive(FieldName::new("athena", f), Unit::GAUSS);
/// }
/// setup_magnetic_field_aliases(&mut reg, "athena", &["Bx", "By", "Bz"], "gas");
/// let d = reg.get_descriptor(&FieldName::new("gas", "magnetic_field_y")).unwrap();
/// assert_eq!(d.units(), &Unit::TESLA);
/// ```
pub fn setup_magnetic_field_aliases<S: AsRef<str>>(
    registry: &mut FieldRegistry,
    ds_ftype: &str,
    ds_fields: &[S],
    ftype: &str,
) {
    let sources: Vec<FieldName> = ds_fields
        .iter()
        .map(|f| FieldName::new(ds_ftype, f.as_ref()))
        .collect();
    let Some(first) = sources.first() else {
        return;
    };
    let from_units = match registry.get_descriptor(first) {
        Ok(descriptor) => descriptor.units().clone(),
        Err(_) => {
            debug!(field = %first, "no frontend magnetic field, skipping aliases");
            return;
        }
    };

    let dataset = registry.dataset();
    let system = dataset.unit_system();
    let mks_like = system.is_mks_like();
    let target = if mks_like {
        "magnetic_field_mks"
    } else {
        "magnetic_field_cgs"
    };
    let to_units = match system.unit(target) {
        Ok(unit) => unit,
        Err(e) => {
            debug!(system = system.name(), error = %e, "no magnetic field unit, skipping aliases");
            return;
        }
    };
    let conversion = Conversion::between(&from_units, &to_units, mks_like);
    let aliases: Vec<(FieldName, FieldName)> = dataset
        .axis_order()
        .iter()
        .zip(sources)
        .map(|(axis, source)| (FieldName::new(ftype, format!("magnetic_field_{axis}")), source))
        .collect();

    for (alias, source) in aliases {
        let provenance = format!("alias of {source}");
        registry.install(
            FieldDescriptor::derived(alias, to_units.clone(), move |desc, ctx| {
                Ok(conversion.apply(&ctx.get(&source)?, desc.units())?)
            })
            .with_provenance(provenance),
        );
    }
}
