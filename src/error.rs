//! Error types with actionable diagnostics.
//!
//! All errors include contextual information to help users resolve issues
//! without needing to consult external documentation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for repartir operations.
pub type Result<T> = std::result::Result<T, RepartirError>;

/// Errors that can occur while loading and splitting a dataset.
///
/// Every error surfaces synchronously from construction; nothing is
/// retried or logged internally.
#[derive(Error, Debug)]
pub enum RepartirError {
    /// Dataset file not found at the given path.
    #[error("Dataset file not found: {path}\n  → Check the path or download the dataset")]
    DatasetNotFound { path: PathBuf },

    /// Dataset file exists but cannot be parsed as a numeric table.
    #[error("Cannot parse dataset {path}:\n  {message}\n  → Expected a delimited text file with a header row and numeric cells")]
    DatasetParsing { path: PathBuf, message: String },

    /// Table has fewer columns than the positional schema requires.
    #[error("Dataset {path} has {columns} columns, need at least {required}\n  → Input features are read from columns 4-5 and targets from all but the last two")]
    SchemaTooNarrow { path: PathBuf, columns: usize, required: usize },

    /// A split fraction is outside the open interval (0, 1).
    #[error("Invalid value for '{field}': {value} (must be > 0.0 and < 1.0)")]
    InvalidFraction { field: &'static str, value: f64 },

    /// Batch size must be positive.
    #[error("Invalid batch size: {value} (must be > 0)")]
    InvalidBatchSize { value: usize },
}

impl RepartirError {
    /// Create a parsing error with context.
    pub fn parsing(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::DatasetParsing { path: path.into(), message: message.into() }
    }

    /// Check if this error comes from an invalid configuration
    /// (as opposed to a problem with the dataset itself).
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::InvalidFraction { .. } | Self::InvalidBatchSize { .. })
    }

    /// Get the error code for structured output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::DatasetNotFound { .. } => "E101",
            Self::DatasetParsing { .. } => "E102",
            Self::SchemaTooNarrow { .. } => "E201",
            Self::InvalidFraction { .. } => "E301",
            Self::InvalidBatchSize { .. } => "E302",
        }
    }
}
