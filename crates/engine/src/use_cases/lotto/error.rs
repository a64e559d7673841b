//! Lotto operation errors.

/// Errors that can occur during a draw.
#[derive(Debug, thiserror::Error)]
pub enum LottoError {
    #[error("Invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: i32, max: i32 },
}
