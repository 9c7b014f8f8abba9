//! Scalar decoding: classifies one dynamically-tagged input value into a
//! recognized scalar kind and extracts its typed payload.
//!
//! Decoding is where all type inference happens. Numeric text is sub-parsed
//! (integer first, then float), structured and collection kinds are flattened
//! into canonical JSON text, and binary content is reduced to a placeholder.
//! The timestamp submodule overrides this natural classification whenever a
//! datetime directive applies to the attribute.

mod json;
mod number;
mod timestamp;

pub use number::{parse_number, Number};
pub use timestamp::reinterpret_datetime;

use crate::error::FrameError;
use crate::types::{AttrValue, FieldType};
use chrono::{DateTime, Utc};

/// Placeholder text stored for a scalar binary value.
pub const BINARY_PLACEHOLDER: &str = "[B]";
/// Placeholder text stored for a set of binary values.
pub const BINARY_SET_PLACEHOLDER: &str = "[BS]";

/// A decoded, typed payload ready to be appended to a column.
#[derive(Debug, Clone, PartialEq)]
pub enum ScalarValue {
    String(String),
    Int64(i64),
    Float64(f64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
    /// Canonical JSON text of a map, list, or set value.
    Json(String),
}

impl ScalarValue {
    /// The field type a column holding this value declares.
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::String(_) => FieldType::String,
            Self::Int64(_) => FieldType::Int64,
            Self::Float64(_) => FieldType::Float64,
            Self::Boolean(_) => FieldType::Boolean,
            Self::Timestamp(_) => FieldType::Timestamp,
            Self::Json(_) => FieldType::Json,
        }
    }
}

/// Decodes one tagged value into its natural scalar kind.
///
/// Returns `Ok(None)` for an explicit null: no column is created or mutated
/// for that attribute on that row, exactly as if it were absent.
pub fn decode_scalar(value: &AttrValue) -> Result<Option<ScalarValue>, FrameError> {
    let scalar = match value {
        AttrValue::S(text) => ScalarValue::String(text.clone()),
        AttrValue::N(text) => match parse_number(text)? {
            Number::Int(i) => ScalarValue::Int64(i),
            Number::Float(f) => ScalarValue::Float64(f),
        },
        AttrValue::Bool(b) => ScalarValue::Boolean(*b),
        AttrValue::B(_) => ScalarValue::String(BINARY_PLACEHOLDER.to_string()),
        AttrValue::BS(_) => ScalarValue::String(BINARY_SET_PLACEHOLDER.to_string()),
        AttrValue::Null => return Ok(None),
        AttrValue::M(_) | AttrValue::L(_) | AttrValue::SS(_) | AttrValue::NS(_) => {
            ScalarValue::Json(json::to_json_text(value)?)
        }
    };

    Ok(Some(scalar))
}
