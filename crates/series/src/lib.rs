//! # nereus-series
//!
//! Validated sea-surface elevation records and the linear detrending step
//! shared by the correction and statistics crates.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["ElevationSeries::new(samples, fs)?"] -->|"validate"| B["ElevationSeries"]
//!     B -->|"detrend()?"| C["Detrended"]
//!     C --> D[".residuals()"]
//!     C --> E[".intercept() / .slope()"]
//!     C --> F[".trend_line()"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use nereus_series::{ElevationSeries, detrend};
//!
//! let series = ElevationSeries::new(vec![1.0, 2.0, 4.0, 3.0], 4.0).unwrap();
//! let fit = detrend(series.samples()).unwrap();
//! assert_eq!(fit.residuals().len(), 4);
//! ```

mod detrend;
mod error;
mod series;
mod stats;

pub use detrend::{Detrended, detrend};
pub use error::SeriesError;
pub use series::ElevationSeries;
pub use stats::{mean, variance};
