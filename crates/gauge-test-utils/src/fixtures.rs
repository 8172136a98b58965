//! Reusable datasets and field arrays.
//!
//! - [`dataset`]: a three-dimensional dataset for any geometry and system.
//! - [`with_vector`] / [`with_uniform_vector`]: attach a three-component
//!   field under the dataset's axis names.
//! - [`with_spacing`]: attach `("index", "dx")` and friends.
//! - [`linear_along`], [`random_array`], [`random_vector`]: array builders.

use gauge_core::{AxisOrder, DatasetInfo, FieldName, Geometry};
use gauge_units::{Quantity, Unit, UnitSystem};
use ndarray::{ArrayD, IxDyn};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::MockChunk;

/// Three-dimensional dataset with the geometry's default axis order.
pub fn dataset(geometry: Geometry, unit_system: UnitSystem) -> DatasetInfo {
    DatasetInfo::new(geometry, unit_system)
}

/// Attach `<ftype>:<basename>_<axis>` for each axis, in order.
pub fn with_vector(
    mut chunk: MockChunk,
    ftype: &str,
    basename: &str,
    axes: &AxisOrder,
    components: [Quantity; 3],
) -> MockChunk {
    for (axis, q) in axes.iter().zip(components) {
        chunk.set_field(FieldName::new(ftype, format!("{basename}_{axis}")), q);
    }
    chunk
}

/// Attach a spatially uniform three-component field.
pub fn with_uniform_vector(
    chunk: MockChunk,
    ftype: &str,
    basename: &str,
    axes: &AxisOrder,
    values: [f64; 3],
    units: Unit,
) -> MockChunk {
    let shape = chunk.shape().to_vec();
    let components = values.map(|v| Quantity::full(&shape, v, units.clone()));
    with_vector(chunk, ftype, basename, axes, components)
}

/// Attach uniform cell spacings `("index", "dx")`, `("index", "dy")`,
/// `("index", "dz")`.
pub fn with_spacing(chunk: MockChunk, spacing: [f64; 3], units: Unit) -> MockChunk {
    ["dx", "dy", "dz"]
        .into_iter()
        .zip(spacing)
        .fold(chunk, |chunk, (name, d)| {
            chunk.with_uniform(FieldName::new("index", name), d, units.clone())
        })
}

/// `intercept + slope * i` where `i` is the index along `axis`.
pub fn linear_along(shape: &[usize], axis: usize, slope: f64, intercept: f64) -> ArrayD<f64> {
    ArrayD::from_shape_fn(IxDyn(shape), |idx| intercept + slope * idx[axis] as f64)
}

/// Array of samples drawn uniformly from `[lo, hi)`.
pub fn random_array(rng: &mut ChaCha8Rng, shape: &[usize], lo: f64, hi: f64) -> ArrayD<f64> {
    ArrayD::from_shape_fn(IxDyn(shape), |_| rng.random_range(lo..hi))
}

/// Three random components in `[-1, 1)` sharing `units`, from a seed.
pub fn random_vector(seed: u64, shape: &[usize], units: Unit) -> [Quantity; 3] {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    [0, 1, 2].map(|_| Quantity::new(random_array(&mut rng, shape, -1.0, 1.0), units.clone()))
}

/// A random direction, normalised, from a seed.
pub fn random_direction(seed: u64) -> [f64; 3] {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    loop {
        let v = [0, 1, 2].map(|_| rng.random_range(-1.0f64..1.0));
        let norm = v.iter().map(|c| c * c).sum::<f64>().sqrt();
        if norm > 1e-3 {
            return v.map(|c| c / norm);
        }
    }
}
