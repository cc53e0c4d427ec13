//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A snapshot or value failed validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// A snapshot could not be decoded from JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
