//! This module defines the core, strongly-typed data representations used
//! throughout the rowframe pipeline: the dynamically-tagged input value model
//! and the canonical `FieldType` enum that replaces fragile string-based types
//! with a safe, serializable representation.

mod attr_value;
mod field_type;

pub use attr_value::{AttrValue, Row};
pub use field_type::FieldType;
