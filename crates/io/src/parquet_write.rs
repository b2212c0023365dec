//! Low-level Parquet column building.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, RecordBatch};
use arrow::datatypes::{DataType, Field, Schema};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use crate::error::IoError;

/// File metadata key holding the sampling rate of a written series (Hz).
pub(crate) const SAMPLE_RATE_KEY: &str = "nereus.sample_rate";

/// Builds a schema of non-nullable Float64 columns.
pub(crate) fn build_schema(names: &[&str]) -> Schema {
    Schema::new(
        names
            .iter()
            .map(|name| Field::new(*name, DataType::Float64, false))
            .collect::<Vec<_>>(),
    )
}

/// Packs equally long Float64 columns into a [`RecordBatch`] matching `schema`.
pub(crate) fn columns_to_record_batch(
    columns: &[&[f64]],
    schema: &Schema,
) -> Result<RecordBatch, IoError> {
    let arrays: Vec<ArrayRef> = columns
        .iter()
        .map(|c| Arc::new(Float64Array::from(c.to_vec())) as ArrayRef)
        .collect();
    Ok(RecordBatch::try_new(Arc::new(schema.clone()), arrays)?)
}

/// Writes a single [`RecordBatch`] to a Parquet file at `path`.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if file creation, batch writing, or file
/// finalisation fails.
pub(crate) fn write_batch(
    path: &Path,
    batch: &RecordBatch,
    props: WriterProperties,
) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), Some(props))?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_columns() {
        let schema = build_schema(&["frequency", "power"]);
        assert_eq!(schema.fields().len(), 2);
        assert_eq!(schema.field(0).name(), "frequency");
        assert_eq!(schema.field(1).name(), "power");
        assert_eq!(schema.field(1).data_type(), &DataType::Float64);
        assert!(!schema.field(0).is_nullable());
    }

    #[test]
    fn batch_matches_schema() {
        let schema = build_schema(&["depth"]);
        let batch = columns_to_record_batch(&[&[1.0, 2.0, 3.0]], &schema).unwrap();
        assert_eq!(batch.num_rows(), 3);
        assert_eq!(batch.num_columns(), 1);
    }

    #[test]
    fn ragged_columns_rejected() {
        let schema = build_schema(&["frequency", "power"]);
        let err = columns_to_record_batch(&[&[0.1, 0.2], &[1.0]], &schema).unwrap_err();
        assert!(matches!(err, IoError::Parquet { .. }));
    }
}
