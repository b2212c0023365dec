//! Welch averaged-periodogram estimator.

use tracing::debug;

use crate::error::SpectralError;
use crate::estimate::SpectrumEstimate;
use crate::fft::squared_magnitudes;
use crate::validate_input;
use crate::window::Window;

/// Shortest usable Welch segment.
const MIN_SEGMENT_LEN: usize = 4;

/// Configuration for the Welch estimator.
///
/// The record is cut into segments of `⌊N / segments⌋` samples that overlap
/// by `overlap` (fraction of a segment). Each segment is windowed and its
/// periodogram averaged.
///
/// # Example
///
/// ```
/// use nereus_spectral::{Window, WelchConfig};
///
/// let config = WelchConfig::new(8)
///     .with_overlap(0.5)
///     .with_window(Window::Hann);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WelchConfig {
    /// Number of segments the record length is divided by.
    segments: usize,
    /// Overlap between consecutive segments, as a fraction of a segment.
    overlap: f64,
    /// Window applied to each segment.
    window: Window,
}

impl WelchConfig {
    /// Creates a configuration with the given segment count.
    ///
    /// Defaults: `overlap = 0.5`, `window = Hamming`.
    pub fn new(segments: usize) -> Self {
        Self {
            segments,
            overlap: 0.5,
            window: Window::Hamming,
        }
    }

    /// Sets the overlap fraction.
    pub fn with_overlap(mut self, overlap: f64) -> Self {
        self.overlap = overlap;
        self
    }

    /// Sets the segment window.
    pub fn with_window(mut self, window: Window) -> Self {
        self.window = window;
        self
    }

    /// Returns the segment count.
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Returns the overlap fraction.
    pub fn overlap(&self) -> f64 {
        self.overlap
    }

    /// Returns the segment window.
    pub fn window(&self) -> Window {
        self.window
    }

    /// Segment length used for a record of `n` samples.
    pub fn segment_len(&self, n: usize) -> usize {
        n / self.segments.max(1)
    }

    /// Minimum record length accepted by this configuration.
    pub fn min_len(&self) -> usize {
        self.segments.max(1) * MIN_SEGMENT_LEN
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SpectralError::InvalidSegments`] | `segments == 0` |
    /// | [`SpectralError::InvalidOverlap`] | overlap outside `[0, 1)` |
    pub fn validate(&self) -> Result<(), SpectralError> {
        if self.segments == 0 {
            return Err(SpectralError::InvalidSegments {
                segments: self.segments,
            });
        }
        if !(0.0..1.0).contains(&self.overlap) {
            return Err(SpectralError::InvalidOverlap {
                overlap: self.overlap,
            });
        }
        Ok(())
    }

    /// Estimates the spectrum of `samples` (already detrended).
    ///
    /// Each segment contributes `|FFT(w·x)|² / (fs·Σw²)`; bins `1..=L/2`
    /// are returned with spacing `fs / L`.
    pub(crate) fn run(
        &self,
        samples: &[f64],
        sample_rate: f64,
    ) -> Result<SpectrumEstimate, SpectralError> {
        self.validate()?;
        validate_input(samples, sample_rate)?;

        let n = samples.len();
        let seg_len = self.segment_len(n);
        if seg_len < MIN_SEGMENT_LEN {
            return Err(SpectralError::SeriesTooShort {
                len: n,
                min: self.min_len(),
            });
        }

        let hop = ((seg_len as f64 * (1.0 - self.overlap)).round() as usize).max(1);
        let n_windows = (n - seg_len) / hop + 1;
        let window = self.window.coefficients(seg_len);
        let window_energy: f64 = window.iter().map(|w| w * w).sum();
        let n_bins = seg_len / 2;

        let mut acc = vec![0.0; n_bins + 1];
        for s in 0..n_windows {
            let start = s * hop;
            let segment: Vec<f64> = samples[start..start + seg_len]
                .iter()
                .zip(&window)
                .map(|(&x, &w)| x * w)
                .collect();
            let mags = squared_magnitudes(&segment);
            for (a, m) in acc.iter_mut().zip(&mags) {
                *a += m;
            }
        }

        let norm = 1.0 / (n_windows as f64 * sample_rate * window_energy);
        let delta_f = sample_rate / seg_len as f64;
        let frequencies = (1..=n_bins).map(|k| k as f64 * delta_f).collect();
        let power = acc[1..].iter().map(|&a| a * norm).collect();

        debug!(seg_len, hop, n_windows, delta_f, "welch estimate");
        SpectrumEstimate::new(frequencies, power, delta_f)
    }
}

impl Default for WelchConfig {
    fn default() -> Self {
        Self::new(4)
    }
}
