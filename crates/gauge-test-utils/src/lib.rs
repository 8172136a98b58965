//! Test utilities and mock types for Gauge development.
//!
//! Provides [`MockChunk`], an in-memory [`FieldAccessor`], and reusable
//! fixtures in [`fixtures`] for building datasets and field arrays.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;

use gauge_core::{FieldAccessor, FieldName, FieldParameter};
use gauge_units::{Quantity, Unit};

/// Mock implementation of [`FieldAccessor`].
///
/// Backed by `HashMap`s of arrays and parameters. Every array added with
/// [`with_uniform`](MockChunk::with_uniform) takes the chunk's shape, so
/// shape-sensitive code (stencils, broadcasting) sees realistic input.
#[derive(Clone, Debug)]
pub struct MockChunk {
    shape: Vec<usize>,
    fields: HashMap<FieldName, Quantity>,
    parameters: HashMap<String, FieldParameter>,
    ghost_zones: usize,
}

impl MockChunk {
    pub fn new(shape: &[usize]) -> Self {
        Self {
            shape: shape.to_vec(),
            fields: HashMap::new(),
            parameters: HashMap::new(),
            ghost_zones: 0,
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Pre-populate a field.
    pub fn set_field(&mut self, field: FieldName, value: Quantity) {
        self.fields.insert(field, value);
    }

    pub fn with_field(mut self, field: FieldName, value: Quantity) -> Self {
        self.set_field(field, value);
        self
    }

    /// Add a field of the chunk's shape filled with `value`.
    pub fn with_uniform(self, field: FieldName, value: f64, units: Unit) -> Self {
        let q = Quantity::full(&self.shape, value, units);
        self.with_field(field, q)
    }

    pub fn with_parameter(mut self, name: impl Into<String>, value: FieldParameter) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    pub fn with_ghost_zones(mut self, ghost_zones: usize) -> Self {
        self.ghost_zones = ghost_zones;
        self
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

impl FieldAccessor for MockChunk {
    fn read(&self, field: &FieldName) -> Option<&Quantity> {
        self.fields.get(field)
    }

    fn parameter(&self, name: &str) -> Option<&FieldParameter> {
        self.parameters.get(name)
    }

    fn ghost_zones(&self) -> usize {
        self.ghost_zones
    }
}
