//! Error types for data loading.

use thiserror::Error;

/// Errors that can occur when loading arena or demon data.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// RON parsing failed.
    #[error("Parse error in '{path}': {details}")]
    ParseError { path: String, details: String },

    /// A patrol route needs at least one waypoint for its index arithmetic.
    #[error("Demon '{demon}' has an empty patrol route")]
    EmptyPatrolRoute { demon: String },

    /// Arena dimensions must be positive.
    #[error("Invalid arena dimension: {field} = {value}")]
    InvalidDimension { field: &'static str, value: f32 },
}
