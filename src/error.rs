//! Error types for the airq-analysis library.

use thiserror::Error;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur during analysis operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Insufficient data points for the operation.
    #[error("insufficient data: need at least {needed}, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Requested station code is not present in the dataset.
    #[error("unknown station code '{code}', available: {available}")]
    UnknownStation { code: String, available: String },

    /// Named column does not exist in the table.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// Narrative lookup table could not be parsed.
    #[error("narrative data error: {0}")]
    NarrativeData(String),
}
