//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Classification itself never fails; these cover values supplied from outside
/// (configuration, parsed labels).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
