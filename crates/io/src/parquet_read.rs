//! Low-level Parquet reading and column extraction.

use std::path::Path;

use arrow::array::{Array, AsArray, RecordBatch};
use arrow::datatypes::{DataType, Float64Type};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::IoError;
use crate::parquet_write::SAMPLE_RATE_KEY;

/// Record batches of a file plus the sampling rate stored in its metadata.
#[derive(Debug)]
pub(crate) struct ParquetContents {
    pub batches: Vec<RecordBatch>,
    pub sample_rate: Option<f64>,
}

/// Reads all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
pub(crate) fn read_batches(path: &Path) -> Result<ParquetContents, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let sample_rate = builder
        .metadata()
        .file_metadata()
        .key_value_metadata()
        .and_then(|kvs| kvs.iter().find(|kv| kv.key == SAMPLE_RATE_KEY))
        .and_then(|kv| kv.value.as_deref())
        .and_then(|v| v.parse::<f64>().ok());

    let batches = builder.build()?.collect::<Result<Vec<_>, _>>()?;

    Ok(ParquetContents {
        batches,
        sample_rate,
    })
}

/// Concatenates the Float64 column `name` across `batches`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::MissingColumn`] | no column called `name` |
/// | [`IoError::InvalidColumnType`] | column is not Float64 |
/// | [`IoError::NullValues`] | column contains nulls |
pub(crate) fn extract_f64_column(
    batches: &[RecordBatch],
    name: &str,
    path: &Path,
) -> Result<Vec<f64>, IoError> {
    let mut values = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());

    for batch in batches {
        let column = batch
            .column_by_name(name)
            .ok_or_else(|| IoError::MissingColumn {
                name: name.to_string(),
                path: path.to_path_buf(),
            })?;
        if column.data_type() != &DataType::Float64 {
            return Err(IoError::InvalidColumnType {
                name: name.to_string(),
                found: column.data_type().to_string(),
            });
        }
        if column.null_count() > 0 {
            return Err(IoError::NullValues {
                name: name.to_string(),
                count: column.null_count(),
            });
        }
        values.extend_from_slice(column.as_primitive::<Float64Type>().values());
    }

    Ok(values)
}
