//! Configuration for the spectral and zero-crossing analyses.

use nereus_spectral::Estimator;

use crate::error::WaveStatsError;

/// Default lower bound of the moment integration window (Hz).
pub const DEFAULT_MIN_FREQ: f64 = 0.0;

/// Default upper bound of the moment integration window (Hz):
/// 1.5 times the 0.33 Hz upper correction frequency.
pub const DEFAULT_MAX_FREQ: f64 = 1.5 * 0.33;

/// Configuration for [`wave_stats_sp`](crate::wave_stats_sp).
///
/// # Example
///
/// ```
/// use nereus_spectral::{Estimator, PeriodogramConfig};
/// use nereus_wavestats::SpectralStatsConfig;
///
/// let config = SpectralStatsConfig::new(Estimator::Periodogram(PeriodogramConfig::default()))
///     .with_window(0.04, 0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SpectralStatsConfig {
    estimator: Estimator,
    min_freq: f64,
    max_freq: f64,
}

impl SpectralStatsConfig {
    /// Creates a configuration using `estimator` and the default window.
    pub fn new(estimator: Estimator) -> Self {
        Self {
            estimator,
            min_freq: DEFAULT_MIN_FREQ,
            max_freq: DEFAULT_MAX_FREQ,
        }
    }

    /// Sets the inclusive integration window.
    pub fn with_window(mut self, min_freq: f64, max_freq: f64) -> Self {
        self.min_freq = min_freq;
        self.max_freq = max_freq;
        self
    }

    /// Returns the spectrum estimator.
    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    /// Returns the lower bound of the integration window.
    pub fn min_freq(&self) -> f64 {
        self.min_freq
    }

    /// Returns the upper bound of the integration window.
    pub fn max_freq(&self) -> f64 {
        self.max_freq
    }

    /// Validates the window and the estimator settings.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`WaveStatsError::InvalidWindow`] | non-finite bounds, `min < 0` or `min >= max` |
    /// | [`WaveStatsError::Spectral`] | invalid estimator settings |
    pub fn validate(&self) -> Result<(), WaveStatsError> {
        if !self.min_freq.is_finite()
            || !self.max_freq.is_finite()
            || self.min_freq < 0.0
            || self.min_freq >= self.max_freq
        {
            return Err(WaveStatsError::InvalidWindow {
                min_freq: self.min_freq,
                max_freq: self.max_freq,
            });
        }
        self.estimator.validate()?;
        Ok(())
    }
}

impl Default for SpectralStatsConfig {
    fn default() -> Self {
        Self::new(Estimator::default())
    }
}

/// Configuration for [`wave_stats_zc`](crate::wave_stats_zc).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZeroCrossingConfig {
    threshold: Option<f64>,
}

impl ZeroCrossingConfig {
    /// Creates a configuration that keeps every complete wave.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops waves lower than `threshold` metres after segmentation.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }

    /// Returns the height threshold, if any.
    pub fn threshold(&self) -> Option<f64> {
        self.threshold
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WaveStatsError::InvalidThreshold`] if the threshold is
    /// negative or not finite.
    pub fn validate(&self) -> Result<(), WaveStatsError> {
        match self.threshold {
            Some(t) if !t.is_finite() || t < 0.0 => {
                Err(WaveStatsError::InvalidThreshold { threshold: t })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nereus_spectral::WelchConfig;

    #[test]
    fn spectral_defaults() {
        let c = SpectralStatsConfig::default();
        assert_relative_eq!(c.min_freq(), 0.0);
        assert_relative_eq!(c.max_freq(), 0.495, epsilon = 1e-12);
        assert_eq!(c.estimator(), &Estimator::Welch(WelchConfig::new(4)));
        assert!(c.validate().is_ok());
    }

    #[test]
    fn inverted_window_rejected() {
        let err = SpectralStatsConfig::default()
            .with_window(0.3, 0.1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, WaveStatsError::InvalidWindow { .. }));
    }

    #[test]
    fn negative_window_rejected() {
        assert!(
            SpectralStatsConfig::default()
                .with_window(-0.1, 0.3)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn invalid_estimator_surfaces() {
        let err = SpectralStatsConfig::new(Estimator::Welch(WelchConfig::new(0)))
            .validate()
            .unwrap_err();
        assert!(matches!(err, WaveStatsError::Spectral(_)));
    }

    #[test]
    fn zero_crossing_threshold() {
        assert_eq!(ZeroCrossingConfig::new().threshold(), None);
        let c = ZeroCrossingConfig::new().with_threshold(0.2);
        assert_eq!(c.threshold(), Some(0.2));
        assert!(c.validate().is_ok());
        assert!(ZeroCrossingConfig::new().with_threshold(0.0).validate().is_ok());
    }

    #[test]
    fn bad_threshold_rejected() {
        for t in [-0.1, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ZeroCrossingConfig::new().with_threshold(t).validate(),
                Err(WaveStatsError::InvalidThreshold { .. })
            ));
        }
    }
}
