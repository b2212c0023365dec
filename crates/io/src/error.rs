//! Error types for nereus-io.

use std::path::PathBuf;

use nereus_series::SeriesError;

/// Error type for all fallible operations in the nereus-io crate.
///
/// Covers missing files, Parquet and JSON failures, and records whose
/// contents cannot form a valid elevation series.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the Parquet or Arrow libraries.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Wraps a JSON serialisation failure.
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the underlying failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when the requested column is not present in a file.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a column is not of type Float64.
    #[error("column '{name}' has type {found}, expected Float64")]
    InvalidColumnType {
        /// Name of the column.
        name: String,
        /// Arrow type that was found.
        found: String,
    },

    /// Returned when a column contains null entries.
    #[error("column '{name}' contains {count} null value(s)")]
    NullValues {
        /// Name of the column.
        name: String,
        /// Number of nulls encountered.
        count: usize,
    },

    /// Returned when neither the configuration nor the file metadata provide a
    /// sampling rate.
    #[error("no sampling rate configured and none stored in {}", path.display())]
    MissingSampleRate {
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Series validation error.
    #[error(transparent)]
    Series(#[from] SeriesError),
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<arrow::error::ArrowError> for IoError {
    fn from(e: arrow::error::ArrowError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Serialization {
            reason: e.to_string(),
        }
    }
}
