//! Application-level error types.

use thiserror::Error;

/// Errors that can occur within the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialisation error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} is not a TrueType/OpenType font")]
    UnsupportedFont(String),

    #[error("{field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("repayment calculation overflowed")]
    Overflow,

    #[error("date out of range: {0}")]
    Date(#[from] jiff::Error),
}

impl AppError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        AppError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Convenience alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;
