//! Unified error types for the domain layer

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Draw range is empty or inverted (`min >= max`)
    #[error("Invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: i32, max: i32 },

    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create an invalid range error
    pub fn invalid_range(min: i32, max: i32) -> Self {
        Self::InvalidRange { min, max }
    }

    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if message.is_empty() {
    ///     return Err(DomainError::validation("Outcome message cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Check if this is an invalid range error
    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Self::InvalidRange { .. })
    }
}
