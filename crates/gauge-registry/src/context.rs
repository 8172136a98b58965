//! Evaluation context passed to field functions.
//!
//! [`EvalContext`] pairs a populated [`FieldRegistry`] with the
//! [`FieldAccessor`] of one chunk. Field functions request their inputs
//! through [`get`](EvalContext::get), which recurses into the registry for
//! derived fields and falls back to the chunk for everything else.

use std::cell::RefCell;

use gauge_core::{DatasetInfo, FieldAccessor, FieldError, FieldName, FieldParameter};
use gauge_units::Quantity;

use crate::registry::FieldRegistry;

/// Per-chunk, per-thread evaluation state.
///
/// Holds the stack of fields currently being evaluated so that a field
/// which transitively requests itself fails with
/// [`FieldError::CyclicDependency`] instead of recursing without bound.
/// The stack makes the context `!Sync`; concurrent evaluation uses one
/// context per thread over a shared registry.
pub struct EvalContext<'a> {
    registry: &'a FieldRegistry,
    accessor: &'a dyn FieldAccessor,
    in_progress: RefCell<Vec<FieldName>>,
}

impl<'a> EvalContext<'a> {
    /// Construct a context over one chunk.
    pub fn new(registry: &'a FieldRegistry, accessor: &'a dyn FieldAccessor) -> Self {
        Self {
            registry,
            accessor,
            in_progress: RefCell::new(Vec::new()),
        }
    }

    /// The registry fields are resolved against.
    pub fn registry(&self) -> &FieldRegistry {
        self.registry
    }

    /// Metadata of the registry's dataset.
    pub fn dataset(&self) -> &DatasetInfo {
        self.registry.dataset()
    }

    /// The chunk's accessor.
    pub fn accessor(&self) -> &dyn FieldAccessor {
        self.accessor
    }

    /// Number of evaluations currently in progress on this context.
    pub fn depth(&self) -> usize {
        self.in_progress.borrow().len()
    }

    /// Value of a field for this chunk.
    ///
    /// Registered fields are evaluated (failures are wrapped in
    /// [`FieldError::PropagatedFailure`]); other names are read from the
    /// accessor.
    pub fn get(&self, field: &FieldName) -> Result<Quantity, FieldError> {
        if self.registry.has(field) {
            self.evaluate(field)
                .map_err(|source| FieldError::PropagatedFailure {
                    field: field.clone(),
                    source: Box::new(source),
                })
        } else {
            self.read_primitive(field)
        }
    }

    /// Read a field straight from the accessor, bypassing the registry.
    pub fn read_primitive(&self, field: &FieldName) -> Result<Quantity, FieldError> {
        self.accessor
            .read(field)
            .cloned()
            .ok_or_else(|| FieldError::NotFound {
                field: field.clone(),
            })
    }

    /// A bound context parameter.
    pub fn parameter(&self, name: &str) -> Option<&FieldParameter> {
        self.accessor.parameter(name)
    }

    /// Uniform cell spacing along `axis`, read from `("index", "d<axis>")`.
    pub fn grid_spacing(&self, axis: &str) -> Result<Quantity, FieldError> {
        self.accessor
            .grid_spacing(axis)
            .ok_or_else(|| FieldError::NotFound {
                field: FieldName::new("index", format!("d{axis}")),
            })
    }

    /// Evaluate a registered field through this context.
    ///
    /// Unlike [`get`](Self::get), failures are returned unwrapped.
    pub fn evaluate(&self, field: &FieldName) -> Result<Quantity, FieldError> {
        {
            let stack = self.in_progress.borrow();
            if stack.contains(field) {
                let mut chain = stack.clone();
                chain.push(field.clone());
                return Err(FieldError::CyclicDependency { chain });
            }
        }
        self.in_progress.borrow_mut().push(field.clone());
        let result = self.registry.evaluate_in(field, self);
        self.in_progress.borrow_mut().pop();
        result
    }
}
