//! High-level Parquet writer configuration and orchestration.

use std::path::Path;

use nereus_series::ElevationSeries;
use nereus_spectral::SpectrumEstimate;
use parquet::format::KeyValue;
use parquet::file::properties::WriterProperties;
use tracing::debug;

use crate::error::IoError;
use crate::parquet_write::{self, SAMPLE_RATE_KEY};

/// Compression algorithm for Parquet output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// No compression.
    None,
    /// Snappy compression (fast, moderate ratio).
    #[default]
    Snappy,
    /// Zstd compression (slower, better ratio).
    Zstd,
}

impl Compression {
    fn to_parquet(self) -> Result<parquet::basic::Compression, IoError> {
        Ok(match self {
            Self::None => parquet::basic::Compression::UNCOMPRESSED,
            Self::Snappy => parquet::basic::Compression::SNAPPY,
            Self::Zstd => {
                let level = parquet::basic::ZstdLevel::try_new(3)?;
                parquet::basic::Compression::ZSTD(level)
            }
        })
    }
}

/// Configuration for writing series and spectra to Parquet.
#[derive(Debug, Clone, PartialEq)]
pub struct WriterConfig {
    compression: Compression,
    row_group_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression: Compression::default(),
            row_group_size: 1_000_000,
        }
    }
}

impl WriterConfig {
    /// Sets the compression algorithm.
    pub fn with_compression(mut self, comp: Compression) -> Self {
        self.compression = comp;
        self
    }

    /// Sets the maximum number of rows per row group.
    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Returns the compression algorithm.
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Returns the maximum number of rows per row group.
    pub fn row_group_size(&self) -> usize {
        self.row_group_size
    }

    /// Validates this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if `row_group_size` is zero.
    pub fn validate(&self) -> Result<(), IoError> {
        if self.row_group_size == 0 {
            return Err(IoError::Validation {
                count: 1,
                details: "row_group_size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn properties(&self, metadata: Option<Vec<KeyValue>>) -> Result<WriterProperties, IoError> {
        Ok(WriterProperties::builder()
            .set_compression(self.compression.to_parquet()?)
            .set_max_row_group_size(self.row_group_size)
            .set_key_value_metadata(metadata)
            .build())
    }
}

/// Writes `series` as a single Float64 column called `column`.
///
/// The sampling rate is stored in the file metadata so that
/// [`read_series`](crate::read_series) can recover it.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the configuration is invalid, or
/// [`IoError::Parquet`] if batch conversion or file I/O fails.
pub fn write_series(
    path: &Path,
    column: &str,
    series: &ElevationSeries,
    config: &WriterConfig,
) -> Result<(), IoError> {
    config.validate()?;

    let schema = parquet_write::build_schema(&[column]);
    let batch = parquet_write::columns_to_record_batch(&[series.samples()], &schema)?;
    let metadata = vec![KeyValue::new(
        SAMPLE_RATE_KEY.to_string(),
        series.sample_rate().to_string(),
    )];

    parquet_write::write_batch(path, &batch, config.properties(Some(metadata))?)?;
    debug!(path = %path.display(), rows = series.len(), "wrote series");
    Ok(())
}

/// Writes `spectrum` as `frequency` and `power` Float64 columns.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the configuration is invalid, or
/// [`IoError::Parquet`] if batch conversion or file I/O fails.
pub fn write_spectrum(
    path: &Path,
    spectrum: &SpectrumEstimate,
    config: &WriterConfig,
) -> Result<(), IoError> {
    config.validate()?;

    let schema = parquet_write::build_schema(&["frequency", "power"]);
    let batch = parquet_write::columns_to_record_batch(
        &[spectrum.frequencies(), spectrum.power()],
        &schema,
    )?;

    parquet_write::write_batch(path, &batch, config.properties(None)?)?;
    debug!(path = %path.display(), bins = spectrum.len(), "wrote spectrum");
    Ok(())
}
