//! Dimensions, units, unit systems and unit-tagged arrays for Gauge.
//!
//! This is the leaf crate of the workspace. It provides the unit algebra
//! that every derived-field computation runs through:
//!
//! - [`Dimensions`]: half-integer exponents over the base dimensions, so
//!   Gaussian electromagnetic quantities (e.g. gauss = g^1/2 cm^-1/2 s^-1)
//!   are represented exactly alongside SI ones.
//! - [`Unit`]: dimensions plus a scale relative to the coherent Gaussian base.
//! - [`Quantity`]: an `ndarray` of samples tagged with a [`Unit`].
//! - [`UnitSystem`]: named derived units built from a set of base units.
//! - [`Equivalence`]: cross-convention conversions (Gaussian ↔ SI).
//! - [`DimensionTable`]: constants selected by the dimensions of a value.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod constants;
pub mod dimensions;
pub mod equivalence;
pub mod error;
pub mod quantity;
pub mod system;
pub mod table;
pub mod unit;

pub use dimensions::{BaseDimension, Dimensions};
pub use equivalence::Equivalence;
pub use error::UnitError;
pub use quantity::Quantity;
pub use system::UnitSystem;
pub use table::DimensionTable;
pub use unit::Unit;
