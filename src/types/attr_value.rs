//! The dynamically-tagged value model for schema-less row-store records.
//!
//! A record ("row") maps attribute names to [`AttrValue`]s. The variant names
//! follow the row store's single-letter type descriptors (`S`, `N`, `M`, ...),
//! which also appear verbatim in error messages.

use std::collections::BTreeMap;

/// One schema-less record: a mapping from attribute name to tagged value.
///
/// An ordered map keeps builds deterministic when several new columns first
/// appear in the same row; no other behavior depends on key order.
pub type Row = BTreeMap<String, AttrValue>;

/// A single dynamically-tagged value, a genuine closed sum type: exactly one
/// kind is populated, and consumers match exhaustively instead of probing
/// optional fields one by one.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// UTF-8 string.
    S(String),
    /// Number, carried as decimal text. The same lexical form must be
    /// classifiable as integer or float, and optionally as a unix epoch, so
    /// parsing is deferred to the decoder.
    N(String),
    /// Boolean.
    Bool(bool),
    /// Binary blob. Content is never decoded into a frame; only its presence
    /// is marked with a placeholder.
    B(Vec<u8>),
    /// Explicit null. Equivalent to the attribute being absent from the row.
    Null,
    /// Nested map of attribute name to tagged value.
    M(BTreeMap<String, AttrValue>),
    /// Ordered list of tagged values.
    L(Vec<AttrValue>),
    /// Set of strings.
    SS(Vec<String>),
    /// Set of numbers, each carried as decimal text.
    NS(Vec<String>),
    /// Set of binary blobs.
    BS(Vec<Vec<u8>>),
}

impl AttrValue {
    /// Convenience constructor for string values.
    pub fn s(text: impl Into<String>) -> Self {
        Self::S(text.into())
    }

    /// Convenience constructor for numeric values.
    pub fn n(text: impl Into<String>) -> Self {
        Self::N(text.into())
    }

    /// The row store's type descriptor for this value, used in error messages.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::S(_) => "S",
            Self::N(_) => "N",
            Self::Bool(_) => "BOOL",
            Self::B(_) => "B",
            Self::Null => "NULL",
            Self::M(_) => "M",
            Self::L(_) => "L",
            Self::SS(_) => "SS",
            Self::NS(_) => "NS",
            Self::BS(_) => "BS",
        }
    }
}
