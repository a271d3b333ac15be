//! Error types shared across the crate.

use crate::config::SettingsError;

/// Result alias used by every fallible public operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error.
///
/// Validation failures are raised before the store is touched. Store failures
/// carry the driver's diagnostic text and mean the operation was rolled back.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Unknown report: {0}")]
    UnknownReport(String),

    #[error(transparent)]
    InvalidValue(#[from] InvalidLabel),

    #[error("Invalid report catalog: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(#[from] SettingsError),
}

/// A required-field or range check that failed before any insert was issued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is a required field")]
    Required { field: &'static str },

    #[error("{field} must be at least {min}, got {value}")]
    TooSmall {
        field: &'static str,
        min: i64,
        value: i64,
    },
}

impl ValidationError {
    /// Name of the offending input field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field } | ValidationError::TooSmall { field, .. } => field,
        }
    }
}

/// A string that does not name any variant of a categorical field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid {field}: {value:?} (expected one of: {expected})")]
pub struct InvalidLabel {
    pub field: &'static str,
    pub value: String,
    pub expected: String,
}
