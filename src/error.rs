//! Error types for the arabic-edit-distance crate.

use std::path::PathBuf;

/// Scoring and configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    /// Score normalization would divide by zero (empty ground truth).
    #[error("division by zero: ground truth {0} is empty")]
    DivisionByZero(&'static str),

    /// Rejected cost table, cost value, or prefix literal.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Spelling variant enumeration would exceed the cap.
    #[error("variant enumeration for {word:?} exceeds {limit} variants")]
    VariantLimit { word: String, limit: usize },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error with context.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for scoring operations.
pub type ScoreResult<T> = Result<T, ScoreError>;
