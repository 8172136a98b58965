//! Gauge: derived fields for gridded simulation data.
//!
//! This is the facade crate that re-exports the public API of the Gauge
//! sub-crates. For most users, adding `gauge` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use gauge::prelude::*;
//!
//! let dataset = DatasetInfo::new(Geometry::Cartesian, UnitSystem::cgs());
//! let mut registry = FieldRegistry::new(dataset);
//! for axis in ["x", "y", "z"] {
//!     registry.add_primitive(FieldName::new("gas", format!("magnetic_field_{axis}")), Unit::GAUSS);
//! }
//! default_registrar()
//!     .setup_dataset(&mut registry, &SetupConfig::default())
//!     .unwrap();
//!
//! assert!(registry.has(&FieldName::new("gas", "magnetic_energy")));
//! assert!(registry.has(&FieldName::new("gas", "current_density_magnitude")));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`units`] | `gauge-units` | Dimensions, units, quantities, unit systems |
//! | [`types`] | `gauge-core` | Field names, geometry, datasets, stencils, errors |
//! | [`registry`] | `gauge-registry` | Descriptors, validators, evaluation, plugins |
//! | [`fields`] | `gauge-fields` | Magnetic field, alias and current density families |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Units and quantities (`gauge-units`).
///
/// [`units::UnitSystem::cgs`] and [`units::UnitSystem::mks`] are the two
/// stock systems; [`units::Equivalence`] converts between them.
pub use gauge_units as units;

/// Core types (`gauge-core`).
///
/// Contains [`types::FieldName`], [`types::Geometry`],
/// [`types::DatasetInfo`], [`types::StencilSpec`] and the
/// [`types::FieldAccessor`] trait implemented by data chunks.
pub use gauge_core as types;

/// Field registry and evaluation (`gauge-registry`).
pub use gauge_registry as registry;

/// Derived-field families (`gauge-fields`).
///
/// [`fields::default_registrar`] installs every family; the individual
/// `setup_*` functions install one each.
pub use gauge_fields as fields;

/// Common imports for typical Gauge usage.
///
/// ```rust
/// use gauge::prelude::*;
/// ```
pub mod prelude {
    // Units
    pub use gauge_units::{Dimensions, Equivalence, Quantity, Unit, UnitSystem};

    // Core types and traits
    pub use gauge_core::{
        AxisOrder, DatasetInfo, FieldAccessor, FieldName, FieldParameter, Geometry, StencilSpec,
    };

    // Errors
    pub use gauge_core::FieldError;
    pub use gauge_units::UnitError;

    // Registry
    pub use gauge_registry::{
        EvalContext, FieldDescriptor, FieldPlugin, FieldRegistry, FnPlugin, PluginRegistrar,
        SetupConfig, Validator,
    };

    // Field families
    pub use gauge_fields::{
        create_magnitude_field, default_registrar, setup_current_density_vector_fields,
        setup_magnetic_field_aliases, setup_magnetic_field_fields,
    };
}
