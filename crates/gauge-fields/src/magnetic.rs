//! The magnetic-field family.
//!
//! Given primitive `magnetic_field_<axis>` components, installs:
//!
//! | Field | Formula | Unit |
//! |-------|---------|------|
//! | `magnetic_field_strength` | `sqrt(Σ B_i²)` | component unit |
//! | `magnetic_energy` | `B² / 2k` | system pressure |
//! | `magnetic_pressure` | `magnetic_energy` | system pressure |
//! | `plasma_beta` | `pressure / magnetic_energy` | dimensionless |
//! | `magnetic_field_poloidal` | geometry dependent | component unit |
//! | `magnetic_field_toroidal` | geometry dependent | component unit |
//! | `alfven_speed` | `B / sqrt(k ρ)` | system velocity |
//! | `mach_alfven` | `|v| / alfven_speed` | dimensionless |
//!
//! `k` is `4π` for Gaussian inputs and `μ₀` for SI inputs, chosen from the
//! dimensions of `B²` at evaluation time (see [`magnetic_factors`]).

use std::sync::Arc;

use gauge_core::{FieldError, FieldName, Geometry};
use gauge_registry::{
    EvalContext, FieldDescriptor, FieldFunction, FieldRegistry, SetupConfig, Validator,
};
use gauge_units::{Quantity, Unit};
use tracing::debug;

use crate::conventions::magnetic_factors;
use crate::spherical::{orthonormal_basis, sph_phi_component, sph_theta_component};
use crate::vector::{magnitude, same_shape};

const PROVENANCE: &str = "magnetic_field";

/// Install the magnetic-field family for `config.ftype`.
///
/// Does nothing unless the component along the dataset's first axis is
/// registered. Derived units follow that component's unit and the
/// dataset's unit system.
pub fn setup_magnetic_field_fields(registry: &mut FieldRegistry, config: &SetupConfig) {
    let ftype = config.ftype.as_str();
    let dataset = registry.dataset();
    let Some(first_axis) = dataset.axis_order().first() else {
        return;
    };
    let first = field(ftype, &format!("magnetic_field_{first_axis}"));
    let units = match registry.get_descriptor(&first) {
        Ok(descriptor) => descriptor.units().clone(),
        Err(_) => {
            debug!(field = %first, "no magnetic field component, skipping");
            return;
        }
    };
    let system = dataset.unit_system();
    let (pressure_units, velocity_units) = match (system.unit("pressure"), system.unit("velocity")) {
        (Ok(p), Ok(v)) => (p, v),
        (Err(e), _) | (_, Err(e)) => {
            debug!(system = system.name(), error = %e, "unit system lacks magnetic units, skipping");
            return;
        }
    };
    let geometry = dataset.geometry();
    let components: [FieldName; 3] = {
        let axes = dataset.axis_order();
        [0, 1, 2].map(|i| field(ftype, &format!("magnetic_field_{}", axes.get(i).unwrap_or(""))))
    };

    let strength = field(ftype, "magnetic_field_strength");
    let energy = field(ftype, "magnetic_energy");
    let alfven = field(ftype, "alfven_speed");

    registry.install(
        FieldDescriptor::derived(strength.clone(), units.clone(), move |desc, ctx| {
            magnitude(desc, ctx, &components)
        })
        .with_provenance(PROVENANCE),
    );

    registry.install(
        FieldDescriptor::derived(energy.clone(), pressure_units.clone(), {
            let strength = strength.clone();
            move |_, ctx| {
                let b = ctx.get(&strength)?;
                let b2 = &b * &b;
                let factors = magnetic_factors();
                let k = factors.resolve(&b2)?;
                Ok(&(b2 * 0.5) / k)
            }
        })
        .with_provenance(PROVENANCE),
    );

    registry.install(
        FieldDescriptor::derived(
            field(ftype, "magnetic_pressure"),
            pressure_units,
            {
                let energy = energy.clone();
                move |_, ctx| ctx.get(&energy)
            },
        )
        .with_provenance(PROVENANCE),
    );

    registry.install(
        FieldDescriptor::derived(field(ftype, "plasma_beta"), Unit::DIMENSIONLESS, {
            let pressure = field(ftype, "pressure");
            let energy = energy.clone();
            move |desc, ctx| {
                let p = ctx.get(&pressure)?;
                let e = ctx.get(&energy)?;
                same_shape(desc, [&p, &e])?;
                Ok(&p / &e)
            }
        })
        .with_provenance(PROVENANCE),
    );

    let decomposition = Decomposition::for_geometry(geometry);
    for (name, rule) in [
        ("magnetic_field_poloidal", decomposition.poloidal(ftype)),
        ("magnetic_field_toroidal", decomposition.toroidal(ftype)),
    ] {
        registry.install(
            FieldDescriptor::with_function(field(ftype, name), units.clone(), rule)
                .with_validator(Validator::parameter("normal"))
                .with_provenance(PROVENANCE),
        );
    }

    registry.install(
        FieldDescriptor::derived(alfven.clone(), velocity_units, {
            let density = field(ftype, "density");
            move |desc, ctx| {
                let b = ctx.get(&strength)?;
                let factors = magnetic_factors();
                let k = factors.lookup(b.units().powi(2).dims())?;
                let rho = ctx.get(&density)?;
                same_shape(desc, [&b, &rho])?;
                Ok(&b / &(k * &rho).sqrt()?)
            }
        })
        .with_provenance(PROVENANCE),
    );

    registry.install(
        FieldDescriptor::derived(field(ftype, "mach_alfven"), Unit::DIMENSIONLESS, {
            let speed = field(ftype, "velocity_magnitude");
            move |desc, ctx| {
                let v = ctx.get(&speed)?;
                let va = ctx.get(&alfven)?;
                same_shape(desc, [&v, &va])?;
                Ok(&v / &va)
            }
        })
        .with_provenance(PROVENANCE),
    );
}

/// How poloidal and toroidal components are obtained for a geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Decomposition {
    /// Project onto the spherical frame whose pole is the `normal` parameter.
    Projected,
    /// Poloidal is the (r, z) component toward the cell; toroidal is `B_theta`.
    Cylindrical,
    /// Native `B_theta` and `B_phi`.
    Spherical,
    /// No formula.
    Undefined,
}

impl Decomposition {
    fn for_geometry(geometry: Geometry) -> Self {
        match geometry {
            Geometry::Cartesian => Self::Projected,
            Geometry::Cylindrical => Self::Cylindrical,
            Geometry::Spherical => Self::Spherical,
            _ => Self::Undefined,
        }
    }

    fn poloidal(self, ftype: &str) -> Option<FieldFunction> {
        match self {
            Self::Projected => {
                let b = cartesian_components(ftype);
                Some(function(move |desc, ctx| project(desc, ctx, &b, Projection::Theta)))
            }
            Self::Cylindrical => {
                let br = field(ftype, "magnetic_field_r");
                let bz = field(ftype, "magnetic_field_z");
                Some(function(move |desc, ctx| {
                    let (b_r, b_z) = (ctx.get(&br)?, ctx.get(&bz)?);
                    let r = ctx.get(&index("r"))?;
                    let z = ctx.get(&index("z"))?;
                    same_shape(desc, [&b_r, &b_z, &r, &z])?;
                    let d = (&r * &r).try_add(&(&z * &z))?.sqrt()?;
                    let along = (&b_r * &r).try_add(&(&b_z * &z))?;
                    Ok(&along / &d)
                }))
            }
            Self::Spherical => Some(passthrough(field(ftype, "magnetic_field_theta"))),
            Self::Undefined => None,
        }
    }

    fn toroidal(self, ftype: &str) -> Option<FieldFunction> {
        match self {
            Self::Projected => {
                let b = cartesian_components(ftype);
                Some(function(move |desc, ctx| project(desc, ctx, &b, Projection::Phi)))
            }
            Self::Cylindrical => Some(passthrough(field(ftype, "magnetic_field_theta"))),
            Self::Spherical => Some(passthrough(field(ftype, "magnetic_field_phi"))),
            Self::Undefined => None,
        }
    }
}

#[derive(Clone, Copy)]
enum Projection {
    Theta,
    Phi,
}

fn project(
    desc: &FieldDescriptor,
    ctx: &EvalContext<'_>,
    components: &[FieldName; 3],
    projection: Projection,
) -> Result<Quantity, FieldError> {
    let basis = ctx
        .parameter("normal")
        .and_then(|p| p.as_vector())
        .and_then(orthonormal_basis)
        .ok_or_else(|| FieldError::PreconditionFailed {
            field: desc.name().clone(),
            validator: "Parameter(normal): expected a non-zero vector".to_string(),
        })?;
    let vector = [
        ctx.get(&components[0])?,
        ctx.get(&components[1])?,
        ctx.get(&components[2])?,
    ];
    let theta = ctx.get(&index("spherical_theta"))?;
    let phi = ctx.get(&index("spherical_phi"))?;

    same_shape(desc, vector.iter().chain([&theta, &phi]))?;

    let value = match projection {
        Projection::Theta => sph_theta_component(&vector, theta.data(), phi.data(), &basis),
        Projection::Phi => sph_phi_component(&vector, theta.data(), phi.data(), &basis),
    }?;
    Ok(value)
}

fn function<F>(f: F) -> FieldFunction
where
    F: Fn(&FieldDescriptor, &EvalContext<'_>) -> Result<Quantity, FieldError>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

fn passthrough(source: FieldName) -> FieldFunction {
    function(move |_, ctx| ctx.get(&source))
}

fn cartesian_components(ftype: &str) -> [FieldName; 3] {
    ["x", "y", "z"].map(|axis| field(ftype, &format!("magnetic_field_{axis}")))
}

fn field(ftype: &str, name: &str) -> FieldName {
    FieldName::new(ftype, name)
}

fn index(name: &str) -> FieldName {
    FieldName::new("index", name)
}
