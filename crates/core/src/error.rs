//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants). A missing inventory entry is not an error: lookups that can
/// miss report it through their return value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Returns `true` for [`DomainError::Validation`].
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = DomainError::validation("price must be >= 0");
        assert_eq!(err.to_string(), "validation failed: price must be >= 0");

        let err = DomainError::invariant("quantity overflow");
        assert_eq!(err.to_string(), "invariant violated: quantity overflow");
    }

    #[test]
    fn is_validation_distinguishes_kinds() {
        assert!(DomainError::validation("x").is_validation());
        assert!(!DomainError::invariant("x").is_validation());
    }
}
