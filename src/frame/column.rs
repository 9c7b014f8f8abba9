//! One named, append-only typed sequence with in-place numeric widening.

use crate::decode::ScalarValue;
use crate::error::FrameError;
use crate::types::FieldType;
use chrono::{DateTime, Utc};

/// The typed backing storage of a column, one vector variant per field type.
/// `None` slots are nulls; the variant is the column's declared type.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    String(Vec<Option<String>>),
    Int64(Vec<Option<i64>>),
    Float64(Vec<Option<f64>>),
    Boolean(Vec<Option<bool>>),
    Timestamp(Vec<Option<DateTime<Utc>>>),
    Json(Vec<Option<String>>),
}

/// A named, homogeneously typed, row-aligned value sequence.
///
/// Invariant: after each processed row, `len()` equals the number of rows
/// processed so far; the builder enforces this with null padding.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    /// Creates the column at the row index of its first non-null value. The
    /// backing vector is pre-sized to `row_index + 1` slots, all null except
    /// the final one, so earlier rows read back as nulls.
    pub fn new_at(row_index: usize, name: impl Into<String>, value: ScalarValue) -> Self {
        fn seed<T>(row_index: usize, v: T) -> Vec<Option<T>> {
            let mut slots = Vec::with_capacity(row_index + 1);
            slots.resize_with(row_index, || None);
            slots.push(Some(v));
            slots
        }

        let data = match value {
            ScalarValue::String(v) => ColumnData::String(seed(row_index, v)),
            ScalarValue::Int64(v) => ColumnData::Int64(seed(row_index, v)),
            ScalarValue::Float64(v) => ColumnData::Float64(seed(row_index, v)),
            ScalarValue::Boolean(v) => ColumnData::Boolean(seed(row_index, v)),
            ScalarValue::Timestamp(v) => ColumnData::Timestamp(seed(row_index, v)),
            ScalarValue::Json(v) => ColumnData::Json(seed(row_index, v)),
        };

        Self {
            name: name.into(),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The column's currently declared element type.
    pub fn field_type(&self) -> FieldType {
        match self.data {
            ColumnData::String(_) => FieldType::String,
            ColumnData::Int64(_) => FieldType::Int64,
            ColumnData::Float64(_) => FieldType::Float64,
            ColumnData::Boolean(_) => FieldType::Boolean,
            ColumnData::Timestamp(_) => FieldType::Timestamp,
            ColumnData::Json(_) => FieldType::Json,
        }
    }

    /// The typed backing storage, for consumers that need direct access
    /// (e.g. the Arrow bridge).
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::String(v) => v.len(),
            ColumnData::Int64(v) => v.len(),
            ColumnData::Float64(v) => v.len(),
            ColumnData::Boolean(v) => v.len(),
            ColumnData::Timestamp(v) => v.len(),
            ColumnData::Json(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends a decoded value. The value's kind must match the declared type,
    /// with two numeric exceptions:
    ///
    /// - Int64 column + Float64 value: the column widens in place — every
    ///   stored integer converts to its float equivalent and the declared type
    ///   becomes Float64. One-directional and permanent.
    /// - Float64 column + Int64 value: the integer is stored as its float
    ///   equivalent; no widening machinery runs.
    ///
    /// Any other mismatch is a fatal [`FrameError::TypeConflict`].
    pub fn push(&mut self, value: ScalarValue) -> Result<(), FrameError> {
        if matches!(
            (&self.data, &value),
            (ColumnData::Int64(_), ScalarValue::Float64(_))
        ) {
            self.widen_to_float();
        }

        match (&mut self.data, value) {
            (ColumnData::String(v), ScalarValue::String(s)) => v.push(Some(s)),
            (ColumnData::Int64(v), ScalarValue::Int64(i)) => v.push(Some(i)),
            (ColumnData::Float64(v), ScalarValue::Float64(f)) => v.push(Some(f)),
            (ColumnData::Float64(v), ScalarValue::Int64(i)) => v.push(Some(i as f64)),
            (ColumnData::Boolean(v), ScalarValue::Boolean(b)) => v.push(Some(b)),
            (ColumnData::Timestamp(v), ScalarValue::Timestamp(t)) => v.push(Some(t)),
            (ColumnData::Json(v), ScalarValue::Json(j)) => v.push(Some(j)),
            (_, value) => {
                return Err(FrameError::TypeConflict {
                    attribute: self.name.clone(),
                    expected: self.field_type(),
                    actual: value.field_type().to_string(),
                })
            }
        }

        Ok(())
    }

    /// Appends a null regardless of the declared type.
    pub fn push_null(&mut self) {
        match &mut self.data {
            ColumnData::String(v) => v.push(None),
            ColumnData::Int64(v) => v.push(None),
            ColumnData::Float64(v) => v.push(None),
            ColumnData::Boolean(v) => v.push(None),
            ColumnData::Timestamp(v) => v.push(None),
            ColumnData::Json(v) => v.push(None),
        }
    }

    /// Reads back the value at a row index; `None` is a null slot.
    pub fn get(&self, row_index: usize) -> Option<ScalarValue> {
        match &self.data {
            ColumnData::String(v) => v.get(row_index)?.clone().map(ScalarValue::String),
            ColumnData::Int64(v) => v.get(row_index)?.map(ScalarValue::Int64),
            ColumnData::Float64(v) => v.get(row_index)?.map(ScalarValue::Float64),
            ColumnData::Boolean(v) => v.get(row_index)?.map(ScalarValue::Boolean),
            ColumnData::Timestamp(v) => v.get(row_index)?.map(ScalarValue::Timestamp),
            ColumnData::Json(v) => v.get(row_index)?.clone().map(ScalarValue::Json),
        }
    }

    /// Rebuilds the backing vector as Float64, converting every stored
    /// integer. O(n), but a column widens at most once over its lifetime.
    fn widen_to_float(&mut self) {
        if let ColumnData::Int64(values) = &self.data {
            log::debug!(
                "widening column {:?} from int64 to float64 ({} rows)",
                self.name,
                values.len()
            );
            self.data = ColumnData::Float64(
                values.iter().map(|slot| slot.map(|i| i as f64)).collect(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_at_row_index_pads_earlier_rows() {
        let column = Column::new_at(2, "a", ScalarValue::Int64(7));
        assert_eq!(column.len(), 3);
        assert_eq!(column.field_type(), FieldType::Int64);
        assert_eq!(column.get(0), None);
        assert_eq!(column.get(1), None);
        assert_eq!(column.get(2), Some(ScalarValue::Int64(7)));
    }

    #[test]
    fn push_matching_kind() {
        let mut column = Column::new_at(0, "a", ScalarValue::String("x".to_string()));
        column.push(ScalarValue::String("y".to_string())).unwrap();
        assert_eq!(column.len(), 2);
        assert_eq!(column.get(1), Some(ScalarValue::String("y".to_string())));
    }

    #[test]
    fn float_widens_int_column_in_place() {
        let mut column = Column::new_at(0, "a", ScalarValue::Int64(1));
        column.push(ScalarValue::Int64(2)).unwrap();
        column.push(ScalarValue::Float64(3.5)).unwrap();

        assert_eq!(column.field_type(), FieldType::Float64);
        assert_eq!(column.get(0), Some(ScalarValue::Float64(1.0)));
        assert_eq!(column.get(1), Some(ScalarValue::Float64(2.0)));
        assert_eq!(column.get(2), Some(ScalarValue::Float64(3.5)));
    }

    #[test]
    fn widening_preserves_nulls() {
        let mut column = Column::new_at(1, "a", ScalarValue::Int64(1));
        column.push(ScalarValue::Float64(2.5)).unwrap();

        assert_eq!(column.get(0), None);
        assert_eq!(column.get(1), Some(ScalarValue::Float64(1.0)));
        assert_eq!(column.get(2), Some(ScalarValue::Float64(2.5)));
    }

    #[test]
    fn int_into_float_column_is_a_noop_path() {
        let mut column = Column::new_at(0, "a", ScalarValue::Float64(1.1));
        column.push(ScalarValue::Int64(2)).unwrap();

        assert_eq!(column.field_type(), FieldType::Float64);
        assert_eq!(column.get(1), Some(ScalarValue::Float64(2.0)));
    }

    #[test]
    fn mismatched_kind_is_a_type_conflict() {
        let mut column = Column::new_at(0, "a", ScalarValue::Int64(1));
        let err = column.push(ScalarValue::Boolean(true)).unwrap_err();

        assert!(matches!(
            err,
            FrameError::TypeConflict { attribute, expected: FieldType::Int64, actual }
                if attribute == "a" && actual == "boolean"
        ));
    }

    #[test]
    fn push_null_keeps_declared_type() {
        let mut column = Column::new_at(0, "a", ScalarValue::Boolean(true));
        column.push_null();
        assert_eq!(column.len(), 2);
        assert_eq!(column.field_type(), FieldType::Boolean);
        assert_eq!(column.get(1), None);
    }
}
