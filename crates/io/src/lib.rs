//! # nereus-io
//!
//! Read elevation records from Parquet, write corrected records and spectra
//! back to Parquet, and serialise statistics reports to JSON. Bridges file
//! formats into the `ElevationSeries` and result types of the analysis
//! crates.

mod error;
mod output;
mod parquet_read;
mod parquet_write;
mod reader;
mod writer;

pub use error::IoError;
pub use output::{
    Outcome, RecordSummary, SpectralSummary, StatsReport, ZeroCrossingSummary, to_json,
};
pub use reader::{ReaderConfig, read_series};
pub use writer::{Compression, WriterConfig, write_series, write_spectrum};
