//! The canonical representation of a column's declared element type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The declared element type of a frame column. Every column is implicitly
/// nullable, so there are no separate nullable variants.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Int64,
    Float64,
    Boolean,
    Timestamp,
    /// Structured or collection values, stored as canonical JSON text.
    Json,
}

impl FieldType {
    /// Returns `true` for the two numeric types that participate in the
    /// Int64 -> Float64 widening path.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int64 | Self::Float64)
    }
}

/// Provides the canonical string representation for a `FieldType`.
/// These strings appear in error messages and are part of the public contract.
impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Int64 => "int64",
            Self::Float64 => "float64",
            Self::Boolean => "boolean",
            Self::Timestamp => "timestamp",
            Self::Json => "json",
        };
        write!(f, "{}", name)
    }
}
