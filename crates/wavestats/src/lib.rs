//! # nereus-wavestats
//!
//! Bulk wave statistics from a sea-surface elevation record.
//!
//! Two independent analyses are provided:
//!
//! - [`wave_stats_sp`]: spectral moments of an estimated power spectrum,
//!   giving `Hm0`, `Tp`, mean periods and bandwidth parameters.
//! - [`wave_stats_zc`]: individual waves delimited by zero down-crossings,
//!   giving `Hsig`, `H10`, `Hmax`, `Hmean`, `Tmean` and `Tsig`.
//!
//! ```mermaid
//! graph TD
//!     A["ElevationSeries"] --> B["detrend"]
//!     B -->|"Estimator"| C["SpectrumEstimate"]
//!     C -->|"moments m-2..m4"| D["WaveStatsSPResult"]
//!     B -->|"segment_waves"| E["Vec&lt;WaveRecord&gt;"]
//!     E -->|"threshold, rank"| F["WaveStatsZCResult"]
//!     C -.->|"on_spectrum"| G["StatsObserver"]
//!     E -.->|"on_waves"| G
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use nereus_series::ElevationSeries;
//! use nereus_wavestats::{SpectralStatsConfig, ZeroCrossingConfig, wave_stats_sp, wave_stats_zc};
//!
//! let fs = 4.0;
//! let samples: Vec<f64> = (0..7200)
//!     .map(|i| 3.0 + 0.5 * (2.0 * std::f64::consts::PI * i as f64 / (8.0 * fs) + 0.3).sin())
//!     .collect();
//! let series = ElevationSeries::new(samples, fs).unwrap();
//!
//! let sp = wave_stats_sp(&series, &SpectralStatsConfig::default()).unwrap();
//! let zc = wave_stats_zc(&series, &ZeroCrossingConfig::default()).unwrap();
//! assert!((sp.h - 3.0).abs() < 1e-2);
//! assert!((zc.tmean - 8.0).abs() < 0.5);
//! ```

mod config;
mod error;
mod moments;
mod observer;
mod result;
mod spectral_stats;
mod zero_crossing;

pub use config::{DEFAULT_MAX_FREQ, DEFAULT_MIN_FREQ, SpectralStatsConfig, ZeroCrossingConfig};
pub use error::{ErrorKind, WaveStatsError};
pub use moments::{MOMENT_ORDERS, SpectralMoments};
pub use observer::{NoopObserver, StatsObserver};
pub use result::{WaveStatsSPResult, WaveStatsZCResult};
pub use spectral_stats::{wave_stats_sp, wave_stats_sp_observed};
pub use zero_crossing::{WaveRecord, segment_waves, wave_stats_zc, wave_stats_zc_observed};
