//! Reading elevation records from Parquet.

use std::path::Path;

use nereus_series::ElevationSeries;
use tracing::debug;

use crate::error::IoError;
use crate::parquet_read;

/// Configuration for [`read_series`].
///
/// The [`Default`] implementation reads the `depth` column and takes the
/// sampling rate from the file metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    /// Name of the Float64 column holding the record.
    column: String,
    /// Sampling rate (Hz); overrides the value stored in the file.
    sample_rate: Option<f64>,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            column: "depth".into(),
            sample_rate: None,
        }
    }
}

impl ReaderConfig {
    /// Set the column name.
    pub fn with_column(mut self, name: impl Into<String>) -> Self {
        self.column = name.into();
        self
    }

    /// Set the sampling rate, overriding the file metadata.
    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = Some(sample_rate);
        self
    }

    /// Returns the column name.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns the configured sampling rate, if any.
    pub fn sample_rate(&self) -> Option<f64> {
        self.sample_rate
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] if the column name is empty.
    pub fn validate(&self) -> Result<(), IoError> {
        if self.column.trim().is_empty() {
            return Err(IoError::Validation {
                count: 1,
                details: "column name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Read an elevation record from a Parquet file.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::MissingColumn`] | configured column absent |
/// | [`IoError::InvalidColumnType`] | column is not Float64 |
/// | [`IoError::NullValues`] | column contains nulls |
/// | [`IoError::MissingSampleRate`] | no rate configured or stored |
/// | [`IoError::Series`] | too few samples, non-finite values or bad rate |
pub fn read_series(path: &Path, config: &ReaderConfig) -> Result<ElevationSeries, IoError> {
    config.validate()?;

    let contents = parquet_read::read_batches(path)?;
    let samples = parquet_read::extract_f64_column(&contents.batches, &config.column, path)?;
    let sample_rate = config
        .sample_rate
        .or(contents.sample_rate)
        .ok_or_else(|| IoError::MissingSampleRate {
            path: path.to_path_buf(),
        })?;

    debug!(
        path = %path.display(),
        column = %config.column,
        rows = samples.len(),
        sample_rate,
        "read series"
    );
    Ok(ElevationSeries::new(samples, sample_rate)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ReaderConfig::default();
        assert_eq!(config.column(), "depth");
        assert_eq!(config.sample_rate(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_methods() {
        let config = ReaderConfig::default()
            .with_column("eta")
            .with_sample_rate(2.0);
        assert_eq!(config.column(), "eta");
        assert_eq!(config.sample_rate(), Some(2.0));
    }

    #[test]
    fn empty_column_rejected() {
        let err = ReaderConfig::default()
            .with_column("  ")
            .validate()
            .unwrap_err();
        assert!(matches!(err, IoError::Validation { .. }));
    }
}
