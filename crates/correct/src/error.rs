//! Error types for the nereus-correct crate.

use nereus_dispersion::DispersionError;
use nereus_series::SeriesError;

/// Broad classification of a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied an unusable argument or configuration.
    InvalidInput,
    /// The computation hit a degenerate numeric situation.
    Computation,
}

/// Error type for all fallible operations in the nereus-correct crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CorrectionError {
    /// Series validation error.
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Dispersion relation error (non-positive mean depth).
    #[error(transparent)]
    Dispersion(#[from] DispersionError),

    /// Returned when the sensor height is negative or not finite.
    #[error("invalid sensor height above bottom: {zpt} m (must be finite and >= 0)")]
    InvalidSensorHeight {
        /// Sensor height that was provided.
        zpt: f64,
    },

    /// Returned when the sensor sits above the mean water surface.
    #[error("sensor height {zpt} m exceeds mean water depth {depth} m")]
    SensorAboveSurface {
        /// Sensor height that was provided.
        zpt: f64,
        /// Mean water depth of the record.
        depth: f64,
    },

    /// Returned when the correction band is malformed.
    #[error("invalid correction band: [{fmin}, {fmax}] Hz (need 0 <= fmin < fmax)")]
    InvalidBand {
        /// Lower band limit.
        fmin: f64,
        /// Upper band limit.
        fmax: f64,
    },

    /// Returned when the gain ceiling is below one or not a number.
    #[error("invalid maximum gain: {max_gain} (must be >= 1)")]
    InvalidMaxGain {
        /// Ceiling that was provided.
        max_gain: f64,
    },

    /// Returned when the inverse transform produces non-finite samples.
    #[error("corrected series contains non-finite values")]
    NonFiniteResult,
}

impl CorrectionError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NonFiniteResult => ErrorKind::Computation,
            Self::Dispersion(DispersionError::NotConverged { .. }) => ErrorKind::Computation,
            _ => ErrorKind::InvalidInput,
        }
    }
}
