//! Configuration passed to every plugin setup call.

use gauge_core::StencilSpec;
use thiserror::Error;

/// Shortest axis a stencil must fit.
const MIN_AXIS_LEN: usize = 3;
/// Longest axis checked when validating a stencil.
const MAX_CHECKED_AXIS_LEN: usize = 64;

/// Errors from [`SetupConfig::validate`].
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The field type is the empty string.
    #[error("field type must not be empty")]
    EmptyFieldType,
    /// The stencil divisor is zero, negative or not finite.
    #[error("stencil divisor must be finite and positive, got {divisor}")]
    InvalidDivisor {
        /// The rejected divisor.
        divisor: f64,
    },
    /// The stencil's slices resolve to different lengths for some axis.
    #[error("stencil slices do not line up on an axis of length {len}")]
    StencilMismatch {
        /// First axis length on which the slices disagree.
        len: usize,
    },
}

/// Field type and stencil for one plugin setup pass.
///
/// # Examples
///
/// ```
/// use gauge_core::StencilSpec;
/// use gauge_registry::SetupConfig;
///
/// let cfg = SetupConfig::new("gas").with_stencil(StencilSpec::backward());
/// cfg.validate().unwrap();
/// assert_eq!(cfg.stencil().divisor, 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SetupConfig {
    /// Field type of the installed fields.
    pub ftype: String,
    /// Finite-difference stencil; `None` selects the centred default.
    pub stencil: Option<StencilSpec>,
}

impl SetupConfig {
    /// Config for `ftype` with the default stencil.
    pub fn new(ftype: impl Into<String>) -> Self {
        Self {
            ftype: ftype.into(),
            stencil: None,
        }
    }

    /// Override the stencil.
    pub fn with_stencil(mut self, stencil: StencilSpec) -> Self {
        self.stencil = Some(stencil);
        self
    }

    /// The configured stencil, or the centred default.
    pub fn stencil(&self) -> StencilSpec {
        self.stencil.unwrap_or_default()
    }

    /// Check the field type and stencil.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ftype.is_empty() {
            return Err(ConfigError::EmptyFieldType);
        }
        let stencil = self.stencil();
        if !stencil.divisor.is_finite() || stencil.divisor <= 0.0 {
            return Err(ConfigError::InvalidDivisor {
                divisor: stencil.divisor,
            });
        }
        if let Some(len) =
            (MIN_AXIS_LEN..=MAX_CHECKED_AXIS_LEN).find(|&len| stencil.resolve(len).is_none())
        {
            return Err(ConfigError::StencilMismatch { len });
        }
        Ok(())
    }
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self::new("gas")
    }
}
