//! Error types for the nereus-spectral crate.

/// Error type for all fallible operations in the nereus-spectral crate.
///
/// Every variant describes an invalid argument or configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpectralError {
    /// Returned when the record is too short for the chosen estimator.
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

    /// Returned when the Welch segment count is zero.
    #[error("invalid segment count: {segments} (must be >= 1)")]
    InvalidSegments {
        /// Segment count that was provided.
        segments: usize,
    },

    /// Returned when the Welch overlap fraction is outside `[0, 1)`.
    #[error("invalid overlap fraction: {overlap} (must be in [0, 1))")]
    InvalidOverlap {
        /// Overlap fraction that was provided.
        overlap: f64,
    },

    /// Returned when the periodogram taper proportion is outside `[0, 0.5]`.
    #[error("invalid taper proportion: {taper} (must be in [0, 0.5])")]
    InvalidTaper {
        /// Taper proportion that was provided.
        taper: f64,
    },

    /// Returned when a smoothing kernel cannot be built.
    #[error("invalid smoothing kernel: {0}")]
    InvalidKernel(String),

    /// Returned when the smoothing kernel is longer than the record.
    #[error("series of {len} samples is shorter than the smoothing kernel ({kernel_len})")]
    KernelTooWide {
        /// Kernel length `2m + 1`.
        kernel_len: usize,
        /// Number of samples provided.
        len: usize,
    },

    /// Returned when frequency and power arrays differ in length.
    #[error("frequency/power length mismatch: {frequencies} vs {power}")]
    LengthMismatch {
        /// Number of frequencies.
        frequencies: usize,
        /// Number of power values.
        power: usize,
    },

    /// Returned when the frequency spacing is not finite and positive.
    #[error("invalid frequency spacing: {delta_f}")]
    InvalidSpacing {
        /// Spacing that was provided.
        delta_f: f64,
    },
}
