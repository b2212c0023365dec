//! Validated elevation record.

use crate::detrend::{Detrended, fit_line};
use crate::error::SeriesError;
use crate::stats;

/// A uniformly sampled sea-surface elevation (or depth) record.
///
/// Guarantees:
/// - length >= 2
/// - all samples are finite
/// - the sampling rate is finite and > 0
///
/// # Example
///
/// ```
/// use nereus_series::ElevationSeries;
///
/// let series = ElevationSeries::new(vec![10.1, 10.3, 9.9, 10.0], 4.0).unwrap();
/// assert_eq!(series.len(), 4);
/// assert_eq!(series.duration(), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ElevationSeries {
    samples: Vec<f64>,
    sample_rate: f64,
}

impl ElevationSeries {
    /// Creates a new series after validating the samples and sampling rate.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SeriesError::InvalidSampleRate`] | `sample_rate` is not finite or `<= 0` |
    /// | [`SeriesError::SeriesTooShort`] | `samples.len() < 2` |
    /// | [`SeriesError::NonFiniteData`] | any sample is NaN or infinite |
    pub fn new(samples: Vec<f64>, sample_rate: f64) -> Result<Self, SeriesError> {
        if !sample_rate.is_finite() || sample_rate <= 0.0 {
            return Err(SeriesError::InvalidSampleRate { fs: sample_rate });
        }
        if samples.len() < 2 {
            return Err(SeriesError::SeriesTooShort {
                len: samples.len(),
                min: 2,
            });
        }
        if !samples.iter().all(|v| v.is_finite()) {
            return Err(SeriesError::NonFiniteData);
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    /// Returns the samples as a slice.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Consumes the series and returns the samples.
    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    /// Returns the sampling rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the series is empty.
    ///
    /// Note: a valid `ElevationSeries` is never empty (minimum length is 2).
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Record length in seconds (`len / fs`).
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }

    /// Mean of the samples, i.e. the mean water depth for a depth record.
    pub fn mean(&self) -> f64 {
        stats::mean(&self.samples)
    }

    /// Sample variance (N-1 denominator).
    pub fn variance(&self) -> f64 {
        stats::variance(&self.samples)
    }

    /// Removes the least-squares linear trend. See [`detrend`](fn@crate::detrend).
    pub fn detrend(&self) -> Detrended {
        fit_line(&self.samples)
    }
}

impl AsRef<[f64]> for ElevationSeries {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}
