//! Plain-text rendering of a frame as a pipe-delimited table, mainly for
//! debugging and log output.

use crate::decode::ScalarValue;
use crate::frame::Frame;
use std::fmt;

/// Strings longer than this render truncated with a `...` suffix.
const MAX_STRING_WIDTH: usize = 10;

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for (idx, column) in self.columns().iter().enumerate() {
            write!(f, "{}", column.name())?;
            if idx < self.num_columns() - 1 {
                write!(f, ",")?;
            }
        }
        writeln!(f, "|")?;

        for row in 0..self.num_rows() {
            write!(f, "|")?;
            for (idx, column) in self.columns().iter().enumerate() {
                match column.get(row) {
                    Some(ScalarValue::String(s)) => {
                        if s.chars().count() > MAX_STRING_WIDTH {
                            let truncated: String = s.chars().take(MAX_STRING_WIDTH).collect();
                            write!(f, "{}...", truncated)?;
                        } else {
                            write!(f, "{}", s)?;
                        }
                    }
                    Some(ScalarValue::Int64(v)) => write!(f, "{}", v)?,
                    Some(ScalarValue::Float64(v)) => write!(f, "{}", v)?,
                    Some(ScalarValue::Boolean(v)) => write!(f, "{}", v)?,
                    Some(ScalarValue::Timestamp(v)) => write!(f, "{}", v.to_rfc3339())?,
                    Some(ScalarValue::Json(v)) => write!(f, "{}", v)?,
                    None => write!(f, "null")?,
                }
                if idx < self.num_columns() - 1 {
                    write!(f, ",")?;
                }
            }
            writeln!(f, "|")?;
        }

        Ok(())
    }
}
