//! Preconditions checked before a field is evaluated.

use std::fmt;

use gauge_core::{FieldAccessor, FieldName};
use smallvec::SmallVec;

use crate::registry::FieldRegistry;

/// A precondition on the evaluation context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Validator {
    /// The named parameter must be bound.
    Parameter(String),
    /// The chunk must carry at least `ghost_zones` cells of halo, and every
    /// listed field must be obtainable.
    Spatial {
        /// Required halo width.
        ghost_zones: usize,
        /// Fields the stencil reads.
        fields: SmallVec<[FieldName; 3]>,
    },
}

impl Validator {
    /// `Parameter(name)`.
    pub fn parameter(name: impl Into<String>) -> Self {
        Self::Parameter(name.into())
    }

    /// `Spatial { ghost_zones, fields }`.
    pub fn spatial(ghost_zones: usize, fields: impl IntoIterator<Item = FieldName>) -> Self {
        Self::Spatial {
            ghost_zones,
            fields: fields.into_iter().collect(),
        }
    }

    /// Check against a registry and chunk; the error describes what is
    /// missing.
    pub fn check(
        &self,
        registry: &FieldRegistry,
        accessor: &dyn FieldAccessor,
    ) -> Result<(), String> {
        match self {
            Self::Parameter(name) => {
                if accessor.parameter(name).is_none() {
                    return Err(format!("parameter '{name}' is not bound"));
                }
            }
            Self::Spatial {
                ghost_zones,
                fields,
            } => {
                let available = accessor.ghost_zones();
                if available < *ghost_zones {
                    return Err(format!(
                        "needs {ghost_zones} ghost zone(s), chunk has {available}"
                    ));
                }
                if let Some(missing) = fields
                    .iter()
                    .find(|f| !registry.has(f) && !accessor.has_field(f))
                {
                    return Err(format!("stencil input {missing} is unavailable"));
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parameter(name) => write!(f, "Parameter({name})"),
            Self::Spatial { ghost_zones, fields } => {
                write!(f, "Spatial({ghost_zones}, [")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{field}")?;
                }
                f.write_str("])")
            }
        }
    }
}
