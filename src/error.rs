//! This module defines the single, unified error type for the entire rowframe
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.
//!
//! Every variant is fatal to the `build_frame` call that produced it: the
//! builder never returns a partial frame, and no error is swallowed or
//! logged-and-continued inside the core.

use crate::types::FieldType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// A numeric-tagged value's text is neither a valid base-10 integer nor a
    /// valid floating-point literal.
    #[error("invalid numeric literal {0:?}")]
    InvalidNumericLiteral(String),

    /// A datetime directive is nonsensical for the value kind encountered,
    /// e.g. a unix-epoch directive applied to a string value or an explicit
    /// layout applied to a number.
    #[error("invalid datetime format {format:?} for attribute {attribute:?}")]
    InvalidDatetimeFormat { attribute: String, format: String },

    /// An explicit layout string failed to parse a given string value.
    #[error("failed to parse datetime {value:?} of attribute {attribute:?} with layout {layout:?}: {source}")]
    DatetimeParse {
        attribute: String,
        value: String,
        layout: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A unix-epoch value is outside the range `chrono` can represent.
    #[error("epoch value {epoch} of attribute {attribute:?} is out of the representable timestamp range")]
    TimestampOutOfRange { attribute: String, epoch: i64 },

    /// A column's already-declared type is incompatible with a newly observed
    /// value's kind, outside the single sanctioned Int64 -> Float64 widening
    /// path.
    #[error("attribute {attribute} should have type {expected}, but got {actual}")]
    TypeConflict {
        attribute: String,
        expected: FieldType,
        actual: String,
    },

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the Arrow library while assembling a
    /// `RecordBatch` from a built frame.
    #[error("Arrow operation failed: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// An error from the Serde JSON library, typically while canonicalizing a
    /// nested value or deserializing a query model.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
