//! Benchmark profiles for the Gauge derived-field framework.
//!
//! - [`reference_registry`]: Cartesian dataset with magnetic field, density
//!   and pressure primitives, populated by the default registrar.
//! - [`reference_chunk`]: a 32³ chunk with a one-cell halo and seeded
//!   random field data.
//! - [`stress_chunk`]: the same at 96³ (~885K cells).

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gauge_core::{DatasetInfo, FieldName, Geometry};
use gauge_fields::default_registrar;
use gauge_registry::{FieldRegistry, SetupConfig};
use gauge_test_utils::{fixtures, MockChunk};
use gauge_units::{Unit, UnitSystem};

/// Edge length of [`reference_chunk`].
pub const REFERENCE_EDGE: usize = 32;
/// Edge length of [`stress_chunk`].
pub const STRESS_EDGE: usize = 96;

/// Magnetic field unit native to `system`.
pub fn field_unit(system: &UnitSystem) -> Unit {
    if system.is_mks_like() {
        Unit::TESLA
    } else {
        Unit::GAUSS
    }
}

/// Registry over a Cartesian dataset in `system`, with every plugin of
/// the default registrar applied.
pub fn reference_registry(system: UnitSystem) -> FieldRegistry {
    let b = field_unit(&system);
    let density = if system.is_mks_like() {
        Unit::KG_PER_M3
    } else {
        Unit::G_PER_CM3
    };
    let pressure = if system.is_mks_like() {
        Unit::PASCAL
    } else {
        Unit::BARYE
    };
    let mut registry = FieldRegistry::new(DatasetInfo::new(Geometry::Cartesian, system));
    for axis in ["x", "y", "z"] {
        registry.add_primitive(FieldName::new("gas", format!("magnetic_field_{axis}")), b.clone());
    }
    registry.add_primitive(FieldName::new("gas", "density"), density);
    registry.add_primitive(FieldName::new("gas", "pressure"), pressure);
    // The default config always validates.
    let _ = default_registrar().setup_dataset(&mut registry, &SetupConfig::default());
    registry
}

/// A cubic chunk of edge `edge` (halo included) with random magnetic
/// field components and uniform density, pressure and spacing.
pub fn chunk(edge: usize, seed: u64, system: &UnitSystem) -> MockChunk {
    let shape = [edge; 3];
    let b = fixtures::random_vector(seed, &shape, field_unit(system));
    let length = if system.is_mks_like() {
        Unit::METER
    } else {
        Unit::CENTIMETER
    };
    let chunk = fixtures::with_vector(
        MockChunk::new(&shape),
        "gas",
        "magnetic_field",
        &Geometry::Cartesian.default_axis_order(),
        b,
    );
    fixtures::with_spacing(chunk, [1.0 / edge as f64; 3], length)
        .with_uniform(FieldName::new("gas", "density"), 1.0, Unit::G_PER_CM3)
        .with_uniform(FieldName::new("gas", "pressure"), 1.0, Unit::BARYE)
        .with_ghost_zones(1)
}

/// [`chunk`] at [`REFERENCE_EDGE`].
pub fn reference_chunk(seed: u64, system: &UnitSystem) -> MockChunk {
    chunk(REFERENCE_EDGE, seed, system)
}

/// [`chunk`] at [`STRESS_EDGE`].
pub fn stress_chunk(seed: u64, system: &UnitSystem) -> MockChunk {
    chunk(STRESS_EDGE, seed, system)
}
