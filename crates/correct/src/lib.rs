//! # nereus-correct
//!
//! Compensates the attenuation of dynamic pressure with depth in
//! pressure-derived elevation records.
//!
//! Linear wave theory gives the ratio between surface elevation and the
//! pressure head measured `zpt` metres above the bed in water of depth `h`:
//!
//! ```text
//! gain(f) = cosh(k·h) / cosh(k·zpt),   k = k(f, h)
//! ```
//!
//! The gain is applied in the frequency domain inside a configurable band and
//! saturated at a configurable maximum.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["ElevationSeries (depth)"] -->|"detrend"| B["residuals + trend line"]
//!     B -->|"FFT"| C["complex bins"]
//!     C -->|"× gain(f) in band"| D["corrected bins"]
//!     D -->|"inverse FFT + trend"| E["ElevationSeries (corrected)"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use nereus_correct::{CorrectionConfig, pr_corr};
//! use nereus_series::ElevationSeries;
//!
//! let depth: Vec<f64> = (0..2048)
//!     .map(|i| 5.0 + 0.2 * (2.0 * std::f64::consts::PI * i as f64 / 40.0).sin())
//!     .collect();
//! let series = ElevationSeries::new(depth, 4.0).unwrap();
//! let corrected = pr_corr(&series, &CorrectionConfig::new(0.3)).unwrap();
//! assert_eq!(corrected.len(), series.len());
//! ```

mod config;
mod correct;
mod error;

pub use config::{CorrectionConfig, DEFAULT_BAND, DEFAULT_MAX_GAIN};
pub use correct::{pr_corr, transfer_gain};
pub use error::{CorrectionError, ErrorKind};
