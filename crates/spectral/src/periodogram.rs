//! Kernel-smoothed periodogram estimator.

use tracing::debug;

use crate::error::SpectralError;
use crate::estimate::SpectrumEstimate;
use crate::fft::squared_magnitudes;
use crate::kernel::DaniellKernel;
use crate::validate_input;
use crate::window::split_cosine_taper;

/// Configuration for the smoothed periodogram.
///
/// The record is tapered with a split cosine bell, its raw periodogram is
/// computed over the full FFT length, and the result is smoothed circularly
/// with a [`DaniellKernel`].
///
/// # Example
///
/// ```
/// use nereus_spectral::{DaniellKernel, PeriodogramConfig};
///
/// let config = PeriodogramConfig::new(DaniellKernel::daniell(&[3, 3]).unwrap())
///     .with_taper(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PeriodogramConfig {
    /// Smoothing kernel.
    kernel: DaniellKernel,
    /// Proportion of the record tapered at each end.
    taper: f64,
}

impl PeriodogramConfig {
    /// Creates a configuration with the given kernel.
    ///
    /// Defaults: `taper = 0.1`.
    pub fn new(kernel: DaniellKernel) -> Self {
        Self { kernel, taper: 0.1 }
    }

    /// Sets the taper proportion.
    pub fn with_taper(mut self, taper: f64) -> Self {
        self.taper = taper;
        self
    }

    /// Returns the smoothing kernel.
    pub fn kernel(&self) -> &DaniellKernel {
        &self.kernel
    }

    /// Returns the taper proportion.
    pub fn taper(&self) -> f64 {
        self.taper
    }

    /// Minimum record length accepted by this configuration.
    pub fn min_len(&self) -> usize {
        self.kernel.len().max(2)
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SpectralError::InvalidTaper`] if the taper is outside
    /// `[0, 0.5]`.
    pub fn validate(&self) -> Result<(), SpectralError> {
        if !(0.0..=0.5).contains(&self.taper) {
            return Err(SpectralError::InvalidTaper { taper: self.taper });
        }
        Ok(())
    }

    /// Estimates the spectrum of `samples` (already detrended).
    ///
    /// Raw ordinates are `|FFT(taper·x)|² / (N·fs·u2)` with
    /// `u2 = 1 − (5/8)·2·taper`. The zero bin is replaced by the mean of its
    /// two neighbours before smoothing so that it does not leak into the low
    /// frequencies. Bins `1..=N/2` are returned with spacing `fs / N`.
    pub(crate) fn run(
        &self,
        samples: &[f64],
        sample_rate: f64,
    ) -> Result<SpectrumEstimate, SpectralError> {
        self.validate()?;
        validate_input(samples, sample_rate)?;

        let n = samples.len();
        if n < self.kernel.len() {
            return Err(SpectralError::KernelTooWide {
                kernel_len: self.kernel.len(),
                len: n,
            });
        }

        let weights = split_cosine_taper(n, self.taper);
        let tapered: Vec<f64> = samples.iter().zip(&weights).map(|(x, w)| x * w).collect();

        let u2 = 1.0 - (5.0 / 8.0) * self.taper * 2.0;
        let norm = 1.0 / (n as f64 * sample_rate * u2);
        let mut raw: Vec<f64> = squared_magnitudes(&tapered)
            .into_iter()
            .map(|m| m * norm)
            .collect();
        raw[0] = 0.5 * (raw[1] + raw[n - 1]);

        let smoothed = self.kernel.apply_circular(&raw);

        let n_bins = n / 2;
        let delta_f = sample_rate / n as f64;
        let frequencies = (1..=n_bins).map(|k| k as f64 * delta_f).collect();
        let power = smoothed[1..=n_bins].to_vec();

        debug!(
            n,
            kernel_half_width = self.kernel.half_width(),
            delta_f,
            "smoothed periodogram estimate"
        );
        SpectrumEstimate::new(frequencies, power, delta_f)
    }
}

impl Default for PeriodogramConfig {
    fn default() -> Self {
        Self::new(DaniellKernel::default())
    }
}
