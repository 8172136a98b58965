//! Dimension-keyed constant tables.
//!
//! Several formulas differ between unit conventions only by a constant:
//! `B²/4π` vs `B²/μ₀`, `curl B = (4π/c) J` vs `curl B = μ₀ J`. A
//! [`DimensionTable`] maps the dimensions of a freshly computed intermediate
//! value to the constant for the convention those dimensions belong to. The
//! lookup happens after the intermediate exists, so the same formula works
//! whichever convention the inputs arrived in.

use indexmap::IndexMap;

use crate::dimensions::Dimensions;
use crate::error::UnitError;
use crate::quantity::Quantity;

/// Constants keyed by the dimensions of the value they apply to.
#[derive(Clone, Debug, Default)]
pub struct DimensionTable {
    entries: IndexMap<Dimensions, Quantity>,
}

impl DimensionTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, dims: Dimensions, constant: Quantity) -> Self {
        self.entries.insert(dims, constant);
        self
    }

    /// Insert or replace the constant for `dims`, returning the old one.
    pub fn insert(&mut self, dims: Dimensions, constant: Quantity) -> Option<Quantity> {
        self.entries.insert(dims, constant)
    }

    /// Constant registered for `dims`.
    pub fn lookup(&self, dims: Dimensions) -> Result<&Quantity, UnitError> {
        self.entries
            .get(&dims)
            .ok_or(UnitError::NoConvention { dims })
    }

    /// Constant registered for the dimensions of `value`.
    pub fn resolve(&self, value: &Quantity) -> Result<&Quantity, UnitError> {
        self.lookup(value.dims())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Dimensions, &Quantity)> {
        self.entries.iter()
    }
}
