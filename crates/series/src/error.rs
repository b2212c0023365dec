//! Error types for the nereus-series crate.

/// Error type for all fallible operations in the nereus-series crate.
///
/// Every variant describes invalid input supplied by the caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when the record is shorter than the minimum required length.
    #[error("series too short: got {len} samples, need at least {min}")]
    SeriesTooShort {
        /// Number of samples provided.
        len: usize,
        /// Minimum number of samples required.
        min: usize,
    },

    /// Returned when the record contains NaN or infinite samples.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when the sampling rate is not a finite positive number.
    #[error("invalid sampling rate: {fs} Hz (must be finite and > 0)")]
    InvalidSampleRate {
        /// Sampling rate that was provided.
        fs: f64,
    },
}
