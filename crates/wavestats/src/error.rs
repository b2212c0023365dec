//! Error types for the nereus-wavestats crate.

use nereus_series::SeriesError;
use nereus_spectral::SpectralError;

/// Broad classification of a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied an unusable record or configuration.
    InvalidInput,
    /// The record was valid but the statistics are undefined for it.
    Computation,
}

/// Error type for all fallible operations in the nereus-wavestats crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WaveStatsError {
    /// Series validation error.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Spectrum estimation error.
    #[error(transparent)]
    Spectral(#[from] SpectralError),

    /// Returned when the integration window bounds are malformed.
    #[error("invalid integration window: [{min_freq}, {max_freq}] Hz (need 0 <= min < max)")]
    InvalidWindow {
        /// Lower bound that was provided.
        min_freq: f64,
        /// Upper bound that was provided.
        max_freq: f64,
    },

    /// Returned when no spectral bin falls inside the integration window.
    #[error("no spectral bins inside integration window [{min_freq}, {max_freq}] Hz")]
    EmptyIntegrationWindow {
        /// Lower bound of the window.
        min_freq: f64,
        /// Upper bound of the window.
        max_freq: f64,
    },

    /// Returned when a statistic evaluates to NaN or infinity.
    #[error("statistic {name} is not finite")]
    NonFiniteStatistic {
        /// Name of the offending statistic.
        name: &'static str,
    },

    /// Returned when the zero-crossing threshold is negative or not finite.
    #[error("invalid wave height threshold: {threshold} m (must be finite and >= 0)")]
    InvalidThreshold {
        /// Threshold that was provided.
        threshold: f64,
    },

    /// Returned when the record contains fewer than two down-crossings.
    #[error("record contains no complete wave")]
    NoCompleteWaves,

    /// Returned when every wave is lower than the height threshold.
    #[error("all {waves} waves are below the height threshold of {threshold} m")]
    NoWavesAboveThreshold {
        /// Threshold that was applied.
        threshold: f64,
        /// Number of complete waves before filtering.
        waves: usize,
    },
}

impl WaveStatsError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyIntegrationWindow { .. } | Self::NonFiniteStatistic { .. } => {
                ErrorKind::Computation
            }
            _ => ErrorKind::InvalidInput,
        }
    }
}
