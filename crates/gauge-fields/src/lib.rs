//! Derived-field plugins for magnetised fluids.
//!
//! Each `setup_*` function installs one family of fields into a
//! [`FieldRegistry`](gauge_registry::FieldRegistry) and does nothing when
//! the family's primitive inputs are absent. [`default_registrar`] lists
//! the families every dataset gets:
//!
//! 1. [`setup_magnetic_field_fields`]: strength, energy, pressure, plasma
//!    beta, poloidal/toroidal decomposition, Alfvén speed and Mach number.
//! 2. [`setup_current_density_vector_fields`]: `curl B` current density and
//!    its magnitude.
//!
//! [`setup_magnetic_field_aliases`] is not a plugin; frontends call it to
//! expose their native magnetic field names before the plugins run.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod aliases;
pub mod conventions;
pub mod current;
pub mod magnetic;
pub mod spherical;
pub mod vector;

pub use aliases::{setup_magnetic_field_aliases, Conversion};
pub use conventions::{current_factors, magnetic_factors};
pub use current::setup_current_density_vector_fields;
pub use magnetic::setup_magnetic_field_fields;
pub use vector::{create_magnitude_field, magnitude};

use gauge_registry::{FnPlugin, PluginRegistrar};

/// Registrar with the magnetic-field and current-density plugins, in that
/// order.
///
/// ```
/// let registrar = gauge_fields::default_registrar();
/// assert_eq!(
///     registrar.names().collect::<Vec<_>>(),
///     ["magnetic_field", "current_density"]
/// );
/// ```
pub fn default_registrar() -> PluginRegistrar {
    PluginRegistrar::new()
        .with(FnPlugin::new("magnetic_field", setup_magnetic_field_fields))
        .with(FnPlugin::new(
            "current_density",
            setup_current_density_vector_fields,
        ))
}
