//! Core types for the Gauge derived-field framework.
//!
//! Defines the vocabulary shared by the registry and the field plugins:
//! field names, coordinate geometries and axis orders, sampling
//! disciplines, per-dataset metadata, finite-difference stencils, the
//! [`FieldAccessor`] trait through which chunks supply data, and the
//! [`FieldError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dataset;
pub mod error;
pub mod geometry;
pub mod name;
pub mod stencil;
pub mod traits;

pub use dataset::{DatasetError, DatasetInfo, DatasetInfoBuilder};
pub use error::FieldError;
pub use geometry::{AxisOrder, Geometry, Sampling};
pub use name::FieldName;
pub use stencil::{AxisSlice, ResolvedStencil, StencilSpec};
pub use traits::{FieldAccessor, FieldParameter};
