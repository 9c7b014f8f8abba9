//! The single-pass frame builder: per-row, per-attribute iteration, lazy
//! column creation, and null padding that keeps every column aligned to the
//! shared row index.

use crate::config::DatetimeFormat;
use crate::decode::{decode_scalar, reinterpret_datetime, ScalarValue};
use crate::error::FrameError;
use crate::frame::{Column, Frame};
use crate::types::Row;
use std::collections::HashMap;

/// Builds a named frame from an ordered, fully materialized row sequence.
///
/// Runs in one pass over the input, O(total key-value pairs). For each
/// attribute of each row, the value decodes through the datetime reinterpreter
/// when `directives` has an entry for the attribute name, and through the
/// scalar decoder otherwise. Columns are created lazily at the row where their
/// first non-null value appears; after every row, columns the row did not
/// touch are padded with a null.
///
/// Output column order is the order in which attribute names were first seen.
/// Any decode or type-conflict error aborts the whole build; no partial frame
/// is returned.
pub fn build_frame(
    name: &str,
    rows: &[Row],
    directives: &HashMap<String, DatetimeFormat>,
) -> Result<Frame, FrameError> {
    // Lookup map plus ordered column storage: output order must be first-seen
    // order, never map iteration order.
    let mut columns: Vec<Column> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for (row_index, row) in rows.iter().enumerate() {
        for (attr_name, value) in row {
            let decoded = match directives.get(attr_name.as_str()) {
                Some(format) => {
                    reinterpret_datetime(attr_name, value, format)?.map(ScalarValue::Timestamp)
                }
                None => decode_scalar(value)?,
            };

            // An explicit null neither creates nor mutates a column; padding
            // below represents it.
            let Some(scalar) = decoded else { continue };

            match index_by_name.get(attr_name.as_str()) {
                Some(&idx) => columns[idx].push(scalar)?,
                None => {
                    log::debug!(
                        "creating column {:?} ({}) at row {}",
                        attr_name,
                        scalar.field_type(),
                        row_index
                    );
                    index_by_name.insert(attr_name.clone(), columns.len());
                    columns.push(Column::new_at(row_index, attr_name, scalar));
                }
            }
        }

        // Pad every column the current row did not touch.
        for column in &mut columns {
            if column.len() != row_index + 1 {
                column.push_null();
            }
        }
    }

    Ok(Frame::new(name, columns))
}
