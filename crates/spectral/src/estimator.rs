//! Estimator selection.

use tracing::instrument;

use crate::error::SpectralError;
use crate::estimate::SpectrumEstimate;
use crate::periodogram::PeriodogramConfig;
use crate::welch::WelchConfig;

/// Anything that turns a detrended record into a [`SpectrumEstimate`].
pub trait SpectrumEstimator {
    /// Estimates the one-sided spectrum of `samples` sampled at
    /// `sample_rate` Hz.
    ///
    /// # Errors
    ///
    /// Returns a [`SpectralError`] describing the invalid argument or
    /// configuration.
    fn estimate(&self, samples: &[f64], sample_rate: f64)
    -> Result<SpectrumEstimate, SpectralError>;

    /// Minimum record length this estimator accepts.
    fn min_len(&self) -> usize;
}

impl SpectrumEstimator for WelchConfig {
    fn estimate(
        &self,
        samples: &[f64],
        sample_rate: f64,
    ) -> Result<SpectrumEstimate, SpectralError> {
        self.run(samples, sample_rate)
    }

    fn min_len(&self) -> usize {
        WelchConfig::min_len(self)
    }
}

impl SpectrumEstimator for PeriodogramConfig {
    fn estimate(
        &self,
        samples: &[f64],
        sample_rate: f64,
    ) -> Result<SpectrumEstimate, SpectralError> {
        self.run(samples, sample_rate)
    }

    fn min_len(&self) -> usize {
        PeriodogramConfig::min_len(self)
    }
}

/// Spectral estimator choice with its own configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum Estimator {
    /// Welch averaged periodogram.
    Welch(WelchConfig),
    /// Daniell-smoothed periodogram.
    Periodogram(PeriodogramConfig),
}

impl Estimator {
    /// Short name used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Welch(_) => "welch",
            Self::Periodogram(_) => "periodogram",
        }
    }

    /// Validates the wrapped configuration.
    ///
    /// # Errors
    ///
    /// Forwards the variant's `validate()` error.
    pub fn validate(&self) -> Result<(), SpectralError> {
        match self {
            Self::Welch(c) => c.validate(),
            Self::Periodogram(c) => c.validate(),
        }
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self::Welch(WelchConfig::default())
    }
}

impl SpectrumEstimator for Estimator {
    #[instrument(skip_all, fields(method = self.name(), n = samples.len()))]
    fn estimate(
        &self,
        samples: &[f64],
        sample_rate: f64,
    ) -> Result<SpectrumEstimate, SpectralError> {
        match self {
            Self::Welch(c) => c.estimate(samples, sample_rate),
            Self::Periodogram(c) => c.estimate(samples, sample_rate),
        }
    }

    fn min_len(&self) -> usize {
        match self {
            Self::Welch(c) => SpectrumEstimator::min_len(c),
            Self::Periodogram(c) => SpectrumEstimator::min_len(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::DaniellKernel;

    #[test]
    fn default_is_welch_four_segments() {
        let e = Estimator::default();
        assert_eq!(e.name(), "welch");
        assert_eq!(e, Estimator::Welch(WelchConfig::new(4)));
        assert_eq!(SpectrumEstimator::min_len(&e), 16);
    }

    #[test]
    fn periodogram_variant() {
        let e = Estimator::Periodogram(PeriodogramConfig::new(
            DaniellKernel::daniell(&[2]).unwrap(),
        ));
        assert_eq!(e.name(), "periodogram");
        assert_eq!(SpectrumEstimator::min_len(&e), 5);
        assert!(e.validate().is_ok());
    }

    #[test]
    fn dispatch_matches_direct_call() {
        let data: Vec<f64> = (0..256).map(|i| (0.3 * i as f64).sin()).collect();
        let config = WelchConfig::new(2);
        let direct = config.estimate(&data, 2.0).unwrap();
        let via_enum = Estimator::Welch(config).estimate(&data, 2.0).unwrap();
        assert_eq!(direct, via_enum);
    }

    #[test]
    fn trait_object_usable() {
        let boxed: Box<dyn SpectrumEstimator> = Box::new(PeriodogramConfig::default());
        let data: Vec<f64> = (0..128).map(|i| (0.9 * i as f64).cos()).collect();
        let s = boxed.estimate(&data, 1.0).unwrap();
        assert_eq!(s.len(), 64);
    }

    #[test]
    fn invalid_config_reported() {
        let e = Estimator::Welch(WelchConfig::new(0));
        assert!(e.validate().is_err());
        let data = [0.0; 64];
        assert!(e.estimate(&data, 1.0).is_err());
    }
}
