//! Current density from the curl of the magnetic field.
//!
//! With no electric field, Ampère's law gives `curl B = k J`, where `k` is
//! `4π/c` in Gaussian units and `μ₀` in SI. The curl is taken with the
//! configured finite-difference stencil over Cartesian components. Only
//! the stencil interior is computed; the halo of the output is zero.

use std::ops::Range;

use gauge_core::{FieldError, FieldName, StencilSpec};
use gauge_registry::{EvalContext, FieldDescriptor, FieldRegistry, SetupConfig, Validator};
use gauge_units::{Quantity, Unit};
use ndarray::{s, Array3, ArrayView3, Ix3, Zip};
use tracing::debug;

use crate::conventions::current_factors;
use crate::vector::create_magnitude_field;

const PROVENANCE: &str = "current_density";
const AXES: [&str; 3] = ["x", "y", "z"];

/// Install `current_density_{x,y,z}` and `current_density_magnitude`.
///
/// Does nothing unless `magnetic_field_x` is registered for
/// `config.ftype`. Each component requires a halo of
/// [`StencilSpec::ghost_zones`] cells around all three magnetic field
/// components.
pub fn setup_current_density_vector_fields(registry: &mut FieldRegistry, config: &SetupConfig) {
    let ftype = config.ftype.as_str();
    let components = AXES.map(|axis| FieldName::new(ftype, format!("magnetic_field_{axis}")));
    if !registry.has(&components[0]) {
        debug!(field = %components[0], "no magnetic field component, skipping current density");
        return;
    }
    let Some(units) = current_density_units(registry) else {
        return;
    };

    let stencil = config.stencil();
    let validator = Validator::spatial(stencil.ghost_zones(), components.clone());
    for (axis, name) in AXES.iter().enumerate() {
        let components = components.clone();
        registry.install(
            FieldDescriptor::derived(
                FieldName::new(ftype, format!("current_density_{name}")),
                units.clone(),
                move |desc, ctx| curl_component(desc, ctx, &components, axis, stencil),
            )
            .with_validator(validator.clone())
            .with_provenance(PROVENANCE),
        );
    }
    create_magnitude_field(registry, "current_density", units, ftype, [validator]);
}

/// `current/length²` in the dataset's unit system.
fn current_density_units(registry: &FieldRegistry) -> Option<Unit> {
    let system = registry.dataset().unit_system();
    let current = if system.is_mks_like() {
        "current_mks"
    } else {
        "current_cgs"
    };
    match (system.unit(current), system.unit("length")) {
        (Ok(current), Ok(length)) => Some(current.divide(&length.powi(2))),
        (Err(e), _) | (_, Err(e)) => {
            debug!(system = system.name(), error = %e, "no current density unit, skipping");
            None
        }
    }
}

/// Component `axis` of `curl B / k`.
///
/// With `j`, `k` the next two axes cyclically, computes
/// `∂B_k/∂x_j - ∂B_j/∂x_k` on the stencil interior.
fn curl_component(
    desc: &FieldDescriptor,
    ctx: &EvalContext<'_>,
    components: &[FieldName; 3],
    axis: usize,
    stencil: StencilSpec,
) -> Result<Quantity, FieldError> {
    let j = (axis + 1) % 3;
    let k = (axis + 2) % 3;
    let invalid = |reason: String| FieldError::InvalidStencil {
        field: desc.name().clone(),
        reason,
    };

    let bk = ctx.get(&components[k])?;
    let units = bk.units().clone();
    let bj = ctx.get(&components[j])?.into_units(&units)?;

    let dj = ctx.grid_spacing(AXES[j])?;
    let length = dj.units().clone();
    let dk = ctx.grid_spacing(AXES[k])?.into_units(&length)?;
    let (Some(dj), Some(dk)) = (dj.value(), dk.value()) else {
        return Err(invalid("grid spacing has no samples".to_string()));
    };

    let vk = bk
        .data()
        .view()
        .into_dimensionality::<Ix3>()
        .map_err(|_| invalid(format!("expected a rank-3 array, got shape {:?}", bk.shape())))?;
    let vj = bj
        .data()
        .view()
        .into_dimensionality::<Ix3>()
        .map_err(|_| invalid(format!("expected a rank-3 array, got shape {:?}", bj.shape())))?;
    if vk.shape() != vj.shape() {
        return Err(FieldError::ShapeMismatch {
            field: desc.name().clone(),
            expected: vk.shape().to_vec(),
            found: vj.shape().to_vec(),
        });
    }

    let dim = vk.dim();
    let mut resolved = Vec::with_capacity(3);
    for len in [dim.0, dim.1, dim.2] {
        let r = stencil
            .resolve(len)
            .ok_or_else(|| invalid(format!("stencil does not fit an axis of length {len}")))?;
        resolved.push(r);
    }
    let center: [Range<usize>; 3] = [0, 1, 2].map(|d| resolved[d].center.clone());
    let shifted = |along: usize, range: &Range<usize>| {
        let mut ranges = center.clone();
        ranges[along] = range.clone();
        ranges
    };

    let kr = window(vk, &shifted(j, &resolved[j].right));
    let kl = window(vk, &shifted(j, &resolved[j].left));
    let jr = window(vj, &shifted(k, &resolved[k].right));
    let jl = window(vj, &shifted(k, &resolved[k].left));
    let hj = stencil.divisor * dj;
    let hk = stencil.divisor * dk;

    let mut out = Array3::<f64>::zeros(dim);
    let mut interior = out.slice_mut(s![
        center[0].clone(),
        center[1].clone(),
        center[2].clone()
    ]);
    Zip::from(&mut interior)
        .and(&kr)
        .and(&kl)
        .and(&jr)
        .and(&jl)
        .for_each(|o, &kr, &kl, &jr, &jl| *o = (kr - kl) / hj - (jr - jl) / hk);

    let curl = Quantity::new(out.into_dyn(), units.divide(&length));
    let factors = current_factors();
    let factor = factors.resolve(&curl)?;
    Ok(&curl / factor)
}

fn window<'a>(array: ArrayView3<'a, f64>, ranges: &[Range<usize>; 3]) -> ArrayView3<'a, f64> {
    array.slice_move(s![ranges[0].clone(), ranges[1].clone(), ranges[2].clone()])
}
