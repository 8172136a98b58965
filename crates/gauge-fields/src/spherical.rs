//! Projection of Cartesian vectors onto a local spherical basis.
//!
//! The polar axis of the spherical frame is a caller-supplied `normal`.
//! Angles are the per-cell polar angle `theta` and azimuth `phi` measured
//! in that frame, in radians.

use gauge_units::{Quantity, UnitError};
use ndarray::{ArrayD, Zip};

/// Orthonormal frame `[x', y', z']` with `z'` along `normal`.
///
/// `x' = ŷ × n̂`, falling back to `ẑ` when `n̂` is parallel to `ŷ`, and
/// `y' = n̂ × x'`. Returns `None` for a zero or non-finite normal.
///
/// ```
/// use gauge_fields::spherical::orthonormal_basis;
///
/// let [x, y, z] = orthonormal_basis([0.0, 0.0, 2.0]).unwrap();
/// assert_eq!(x, [1.0, 0.0, 0.0]);
/// assert_eq!(y, [0.0, 1.0, 0.0]);
/// assert_eq!(z, [0.0, 0.0, 1.0]);
/// ```
pub fn orthonormal_basis(normal: [f64; 3]) -> Option<[[f64; 3]; 3]> {
    let z = normalize(normal)?;
    let x = normalize(cross([0.0, 1.0, 0.0], z)).unwrap_or([0.0, 0.0, 1.0]);
    let y = cross(z, x);
    Some([x, y, z])
}

/// Polar-angle component `v · θ̂` of a Cartesian vector field.
///
/// Components are expressed in the first component's unit.
///
/// # Panics
///
/// Panics if the components, `theta` and `phi` do not share one shape.
pub fn sph_theta_component(
    vector: &[Quantity; 3],
    theta: &ArrayD<f64>,
    phi: &ArrayD<f64>,
    basis: &[[f64; 3]; 3],
) -> Result<Quantity, UnitError> {
    let [xp, yp, zp] = *basis;
    project(vector, theta, phi, |t, p| {
        let (st, ct) = t.sin_cos();
        let (sp, cp) = p.sin_cos();
        [0, 1, 2].map(|i| xp[i] * ct * cp + yp[i] * ct * sp - zp[i] * st)
    })
}

/// Azimuthal component `v · φ̂` of a Cartesian vector field.
///
/// `theta` is accepted for symmetry with [`sph_theta_component`] and only
/// fixes the output shape.
///
/// # Panics
///
/// Panics if the components, `theta` and `phi` do not share one shape.
pub fn sph_phi_component(
    vector: &[Quantity; 3],
    theta: &ArrayD<f64>,
    phi: &ArrayD<f64>,
    basis: &[[f64; 3]; 3],
) -> Result<Quantity, UnitError> {
    let [xp, yp, _] = *basis;
    project(vector, theta, phi, |_, p| {
        let (sp, cp) = p.sin_cos();
        [0, 1, 2].map(|i| -xp[i] * sp + yp[i] * cp)
    })
}

fn project(
    vector: &[Quantity; 3],
    theta: &ArrayD<f64>,
    phi: &ArrayD<f64>,
    unit_vector: impl Fn(f64, f64) -> [f64; 3],
) -> Result<Quantity, UnitError> {
    let units = vector[0].units().clone();
    let vy = vector[1].in_units(&units)?;
    let vz = vector[2].in_units(&units)?;

    let mut out = ArrayD::zeros(vector[0].data().raw_dim());
    Zip::from(&mut out)
        .and(vector[0].data())
        .and(vy.data())
        .and(vz.data())
        .and(theta)
        .and(phi)
        .for_each(|o, &x, &y, &z, &t, &p| {
            let hat = unit_vector(t, p);
            *o = x * hat[0] + y * hat[1] + z * hat[2];
        });
    Ok(Quantity::new(out, units))
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn normalize(v: [f64; 3]) -> Option<[f64; 3]> {
    let norm = v.iter().map(|c| c * c).sum::<f64>().sqrt();
    (norm.is_finite() && norm > 0.0).then(|| v.map(|c| c / norm))
}
