//! Frame -> Arrow conversion.

use crate::error::FrameError;
use crate::frame::{Column, ColumnData, Frame};
use arrow::array::{
    ArrayRef, BooleanArray, Float64Array, Int64Array, StringArray, TimestampNanosecondArray,
};
use arrow::record_batch::{RecordBatch, RecordBatchOptions};
use arrow_schema::{DataType, Field, Schema, TimeUnit};
use std::sync::Arc;

/// Converts a built frame into an Arrow `RecordBatch`.
///
/// Every field is nullable. Timestamps convert to nanoseconds since epoch in
/// UTC; JSON columns are carried as their canonical text in a `Utf8` field.
pub fn frame_to_record_batch(frame: &Frame) -> Result<RecordBatch, FrameError> {
    let mut fields = Vec::with_capacity(frame.num_columns());
    let mut arrays: Vec<ArrayRef> = Vec::with_capacity(frame.num_columns());

    for column in frame.columns() {
        let (data_type, array) = column_to_arrow(column)?;
        fields.push(Field::new(column.name(), data_type, true));
        arrays.push(array);
    }

    let schema = Arc::new(Schema::new(fields));
    let options = RecordBatchOptions::new().with_row_count(Some(frame.num_rows()));
    Ok(RecordBatch::try_new_with_options(schema, arrays, &options)?)
}

fn column_to_arrow(column: &Column) -> Result<(DataType, ArrayRef), FrameError> {
    match column.data() {
        ColumnData::String(values) => {
            let array: ArrayRef = Arc::new(StringArray::from(values.clone()));
            Ok((DataType::Utf8, array))
        }
        ColumnData::Int64(values) => {
            let array: ArrayRef = Arc::new(Int64Array::from(values.clone()));
            Ok((DataType::Int64, array))
        }
        ColumnData::Float64(values) => {
            let array: ArrayRef = Arc::new(Float64Array::from(values.clone()));
            Ok((DataType::Float64, array))
        }
        ColumnData::Boolean(values) => {
            let array: ArrayRef = Arc::new(BooleanArray::from(values.clone()));
            Ok((DataType::Boolean, array))
        }
        ColumnData::Timestamp(values) => {
            let mut nanos: Vec<Option<i64>> = Vec::with_capacity(values.len());
            for slot in values {
                match slot {
                    None => nanos.push(None),
                    Some(ts) => {
                        let value = ts.timestamp_nanos_opt().ok_or_else(|| {
                            FrameError::TimestampOutOfRange {
                                attribute: column.name().to_string(),
                                epoch: ts.timestamp(),
                            }
                        })?;
                        nanos.push(Some(value));
                    }
                }
            }
            let array: ArrayRef =
                Arc::new(TimestampNanosecondArray::from(nanos).with_timezone("UTC"));
            Ok((
                DataType::Timestamp(TimeUnit::Nanosecond, Some("UTC".into())),
                array,
            ))
        }
        ColumnData::Json(values) => {
            let array: ArrayRef = Arc::new(StringArray::from(values.clone()));
            Ok((DataType::Utf8, array))
        }
    }
}
