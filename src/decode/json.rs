//! Canonical JSON-text encoding of structured and collection values.
//!
//! Maps, lists, and sets are flattened to JSON text at decode time so that
//! every column stays a flat, uniformly-typed sequence; the column layer never
//! sees nesting. Map keys serialize in sorted order (both the input maps and
//! `serde_json`'s object representation are ordered), so equal inputs always
//! produce byte-identical text.

use super::number::{parse_number, Number};
use super::{BINARY_PLACEHOLDER, BINARY_SET_PLACEHOLDER};
use crate::error::FrameError;
use crate::types::AttrValue;
use serde_json::{Map, Value};

/// Serializes a map, list, or set value as canonical JSON text.
pub(super) fn to_json_text(value: &AttrValue) -> Result<String, FrameError> {
    Ok(serde_json::to_string(&to_json_value(value)?)?)
}

/// Recursively converts a tagged value into a generic JSON value tree.
/// Numbers resolve to int or float via the shared integer-then-float rule;
/// binary members reduce to the same placeholders used at the top level.
fn to_json_value(value: &AttrValue) -> Result<Value, FrameError> {
    let converted = match value {
        AttrValue::S(text) => Value::String(text.clone()),
        AttrValue::N(text) => number_to_json(text)?,
        AttrValue::Bool(b) => Value::Bool(*b),
        AttrValue::B(_) => Value::String(BINARY_PLACEHOLDER.to_string()),
        AttrValue::Null => Value::Null,
        AttrValue::M(members) => {
            let mut object = Map::new();
            for (key, member) in members {
                object.insert(key.clone(), to_json_value(member)?);
            }
            Value::Object(object)
        }
        AttrValue::L(members) => Value::Array(
            members
                .iter()
                .map(to_json_value)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        AttrValue::SS(members) => Value::Array(
            members
                .iter()
                .map(|text| Value::String(text.clone()))
                .collect(),
        ),
        AttrValue::NS(members) => Value::Array(
            members
                .iter()
                .map(|text| number_to_json(text))
                .collect::<Result<Vec<_>, _>>()?,
        ),
        AttrValue::BS(members) => Value::Array(
            members
                .iter()
                .map(|_| Value::String(BINARY_SET_PLACEHOLDER.to_string()))
                .collect(),
        ),
    };

    Ok(converted)
}

fn number_to_json(text: &str) -> Result<Value, FrameError> {
    match parse_number(text)? {
        Number::Int(i) => Ok(Value::from(i)),
        Number::Float(f) => Ok(Value::from(f)),
    }
}
