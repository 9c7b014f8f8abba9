//! Query-level configuration handed to the builder by the host: the
//! deserialized query model and the per-attribute datetime directive type.
//!
//! The directive is a real enum rather than a set of magic strings. The two
//! unix-epoch sentinels have exactly one canonical spelling each
//! (`"unix_seconds"` / `"unix_millis"`); any other non-empty string is an
//! explicit `chrono` strftime layout, and "no reinterpretation" is modeled as
//! absence from the directive map.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Canonical spelling of the "seconds since unix epoch" directive.
pub const UNIX_SECONDS: &str = "unix_seconds";
/// Canonical spelling of the "milliseconds since unix epoch" directive.
pub const UNIX_MILLIS: &str = "unix_millis";

//==================================================================================
// I. Datetime Directive
//==================================================================================

/// A per-attribute instruction to reinterpret values as timestamps instead of
/// their natural scalar type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatetimeFormat {
    /// Numeric values are whole seconds since the unix epoch.
    UnixSeconds,
    /// Numeric values are milliseconds since the unix epoch.
    UnixMillis,
    /// String values are parsed against this `chrono` strftime layout,
    /// e.g. `%Y-%m-%dT%H:%M:%S%.3fZ`.
    Layout(String),
}

impl DatetimeFormat {
    /// Parses the wire spelling of a directive. The empty string means "no
    /// reinterpretation" and yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "" => None,
            UNIX_SECONDS => Some(Self::UnixSeconds),
            UNIX_MILLIS => Some(Self::UnixMillis),
            layout => Some(Self::Layout(layout.to_string())),
        }
    }

    /// The canonical wire spelling of this directive.
    pub fn as_str(&self) -> &str {
        match self {
            Self::UnixSeconds => UNIX_SECONDS,
            Self::UnixMillis => UNIX_MILLIS,
            Self::Layout(layout) => layout,
        }
    }
}

impl fmt::Display for DatetimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for DatetimeFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DatetimeFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).ok_or_else(|| D::Error::custom("datetime format must not be empty"))
    }
}

//==================================================================================
// II. Query Model
//==================================================================================

/// One datetime-reinterpreted attribute within a query.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DatetimeAttribute {
    pub name: String,
    pub format: DatetimeFormat,
}

/// The query model sent by the host, one per panel query. Only the parts the
/// frame builder consumes are modeled; statement execution belongs to the
/// caller.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryModel {
    /// The query statement forwarded verbatim to the row store.
    pub query_text: String,
    /// Maximum number of rows the caller should fetch; `None` means no limit.
    pub limit: Option<i64>,
    /// Attributes whose values are timestamps rather than plain scalars.
    pub datetime_attributes: Vec<DatetimeAttribute>,
}

impl QueryModel {
    /// Flattens the datetime attribute list into the lookup map the builder
    /// consumes. Later entries for the same name win.
    pub fn directive_map(&self) -> HashMap<String, DatetimeFormat> {
        self.datetime_attributes
            .iter()
            .map(|attr| (attr.name.clone(), attr.format.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonical_spellings() {
        assert_eq!(
            DatetimeFormat::parse("unix_seconds"),
            Some(DatetimeFormat::UnixSeconds)
        );
        assert_eq!(
            DatetimeFormat::parse("unix_millis"),
            Some(DatetimeFormat::UnixMillis)
        );
        assert_eq!(
            DatetimeFormat::parse("%Y-%m-%d"),
            Some(DatetimeFormat::Layout("%Y-%m-%d".to_string()))
        );
        assert_eq!(DatetimeFormat::parse(""), None);
    }

    #[test]
    fn query_model_from_json() {
        let raw = r#"{
            "queryText": "SELECT * FROM metrics",
            "limit": 100,
            "datetimeAttributes": [
                {"name": "created", "format": "unix_seconds"},
                {"name": "updated", "format": "%Y-%m-%dT%H:%M:%SZ"}
            ]
        }"#;

        let model: QueryModel = serde_json::from_str(raw).unwrap();
        assert_eq!(model.query_text, "SELECT * FROM metrics");
        assert_eq!(model.limit, Some(100));

        let directives = model.directive_map();
        assert_eq!(directives.len(), 2);
        assert_eq!(directives["created"], DatetimeFormat::UnixSeconds);
        assert_eq!(
            directives["updated"],
            DatetimeFormat::Layout("%Y-%m-%dT%H:%M:%SZ".to_string())
        );
    }

    #[test]
    fn query_model_missing_fields_default() {
        let model: QueryModel = serde_json::from_str(r#"{"queryText": "SELECT 1"}"#).unwrap();
        assert_eq!(model.limit, None);
        assert!(model.datetime_attributes.is_empty());
    }

    #[test]
    fn empty_format_is_rejected() {
        let raw = r#"{"datetimeAttributes": [{"name": "ts", "format": ""}]}"#;
        assert!(serde_json::from_str::<QueryModel>(raw).is_err());
    }

    #[test]
    fn directive_round_trips_through_json() {
        let attr = DatetimeAttribute {
            name: "ts".to_string(),
            format: DatetimeFormat::UnixMillis,
        };
        let encoded = serde_json::to_string(&attr).unwrap();
        assert_eq!(encoded, r#"{"name":"ts","format":"unix_millis"}"#);
        let decoded: DatetimeAttribute = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, attr);
    }
}
