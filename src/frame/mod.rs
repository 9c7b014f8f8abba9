//! The frame layer: named, append-only typed columns and the single-pass
//! builder that assembles them from a row sequence.

mod builder;
mod column;
mod render;


pub use builder::build_frame;
pub use column::{Column, ColumnData};

/// A named, ordered collection of columns sharing one row count; the unit
/// returned to callers.
///
/// Column order equals the order in which attribute names were first seen
/// across the row sequence, and every column's length equals the number of
/// rows processed.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    name: String,
    columns: Vec<Column>,
}

impl Frame {
    pub(crate) fn new(name: impl Into<String>, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in first-seen order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// The shared row count. All columns have this length.
    pub fn num_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }
}
