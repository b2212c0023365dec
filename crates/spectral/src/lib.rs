//! # nereus-spectral
//!
//! Power spectral density estimators for detrended elevation records.
//!
//! Both estimators return a [`SpectrumEstimate`]: positive frequencies only
//! (the zero bin is dropped), uniform spacing, and power expressed as a
//! two-sided density so that `Σ 2·power·Δf` approximates the variance.
//!
//! | Estimator | Config | Defaults |
//! |-----------|--------|----------|
//! | Welch averaged PSD | [`WelchConfig`] | 4 segments, 50 % overlap, Hamming |
//! | Smoothed periodogram | [`PeriodogramConfig`] | Daniell (9,9,9), 10 % taper |
//!
//! ```mermaid
//! graph LR
//!     A["&[f64] + fs"] -->|"Estimator::estimate()"| B["SpectrumEstimate"]
//!     B --> C[".frequencies()"]
//!     B --> D[".power()"]
//!     B --> E[".peak()"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use nereus_spectral::{Estimator, SpectrumEstimator, WelchConfig};
//!
//! let fs = 4.0;
//! let data: Vec<f64> = (0..1024)
//!     .map(|i| (2.0 * std::f64::consts::PI * 0.125 * i as f64 / fs).sin())
//!     .collect();
//! let spectrum = Estimator::Welch(WelchConfig::new(4)).estimate(&data, fs).unwrap();
//! let (f_peak, _) = spectrum.peak().unwrap();
//! assert!((f_peak - 0.125).abs() < 2.0 * spectrum.delta_f());
//! ```

mod error;
mod estimate;
mod estimator;
mod fft;
mod kernel;
mod periodogram;
mod welch;
mod window;

pub use error::SpectralError;
pub use estimate::SpectrumEstimate;
pub use estimator::{Estimator, SpectrumEstimator};
pub use kernel::{DaniellKernel, KernelKind};
pub use periodogram::PeriodogramConfig;
pub use welch::WelchConfig;
pub use window::{Window, split_cosine_taper};

/// Validates the arguments shared by every estimator.
pub(crate) fn validate_input(samples: &[f64], sample_rate: f64) -> Result<(), SpectralError> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(SpectralError::InvalidSampleRate { fs: sample_rate });
    }
    if samples.len() < 2 {
        return Err(SpectralError::SeriesTooShort {
            len: samples.len(),
            min: 2,
        });
    }
    if !samples.iter().all(|v| v.is_finite()) {
        return Err(SpectralError::NonFiniteData);
    }
    Ok(())
}
