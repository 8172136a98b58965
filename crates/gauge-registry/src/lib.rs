//! Field registry and evaluation engine for Gauge.
//!
//! A [`FieldRegistry`] maps [`FieldName`](gauge_core::FieldName)s to
//! [`FieldDescriptor`]s for one dataset. Evaluation is lazy and
//! depth-first: a descriptor's function pulls the fields it needs through
//! the [`EvalContext`], which evaluates registered fields recursively and
//! reads everything else from the chunk's
//! [`FieldAccessor`](gauge_core::FieldAccessor).
//!
//! Plugins populate a registry through the [`PluginRegistrar`], one call
//! per dataset.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod context;
pub mod descriptor;
pub mod plugin;
pub mod registry;
pub mod validator;

pub use config::{ConfigError, SetupConfig};
pub use context::EvalContext;
pub use descriptor::{FieldDescriptor, FieldFunction};
pub use plugin::{FieldPlugin, FnPlugin, PluginRegistrar, SetupFn};
pub use registry::FieldRegistry;
pub use validator::Validator;
