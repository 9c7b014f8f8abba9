//! Reinterpretation of string and numeric payloads as absolute timestamps.
//!
//! When a datetime directive exists for an attribute, this module takes
//! precedence over natural scalar decoding: every value in that column becomes
//! a timestamp, or the build fails. There is no silent fallback to the value's
//! natural kind.

use crate::config::DatetimeFormat;
use crate::error::FrameError;
use crate::types::{AttrValue, FieldType};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Reinterprets one tagged value as a timestamp under the given directive.
///
/// Returns `Ok(None)` for an explicit null, mirroring the scalar decoder's
/// null-skip. Every directive/kind mismatch is an error:
/// - string value + unix-epoch directive, or numeric value + explicit layout
///   -> [`FrameError::InvalidDatetimeFormat`]
/// - any non-string, non-numeric kind -> [`FrameError::TypeConflict`]
pub fn reinterpret_datetime(
    attribute: &str,
    value: &AttrValue,
    format: &DatetimeFormat,
) -> Result<Option<DateTime<Utc>>, FrameError> {
    match (value, format) {
        (AttrValue::Null, _) => Ok(None),

        (AttrValue::S(text), DatetimeFormat::Layout(layout)) => {
            parse_layout(attribute, text, layout).map(Some)
        }
        (AttrValue::S(_), _) => Err(FrameError::InvalidDatetimeFormat {
            attribute: attribute.to_string(),
            format: format.to_string(),
        }),

        (AttrValue::N(text), DatetimeFormat::UnixSeconds) => {
            from_epoch(attribute, text, |epoch| {
                Utc.timestamp_opt(epoch, 0).single()
            })
            .map(Some)
        }
        (AttrValue::N(text), DatetimeFormat::UnixMillis) => {
            from_epoch(attribute, text, |epoch| {
                Utc.timestamp_millis_opt(epoch).single()
            })
            .map(Some)
        }
        (AttrValue::N(_), DatetimeFormat::Layout(_)) => Err(FrameError::InvalidDatetimeFormat {
            attribute: attribute.to_string(),
            format: format.to_string(),
        }),

        (other, _) => Err(FrameError::TypeConflict {
            attribute: attribute.to_string(),
            expected: FieldType::Timestamp,
            actual: other.type_tag().to_string(),
        }),
    }
}

/// Parses a string against an explicit layout. Offset-aware layouts win; a
/// layout without an offset is parsed naive and taken as UTC.
fn parse_layout(attribute: &str, text: &str, layout: &str) -> Result<DateTime<Utc>, FrameError> {
    if let Ok(parsed) = DateTime::parse_from_str(text, layout) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(text, layout)
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|source| FrameError::DatetimeParse {
            attribute: attribute.to_string(),
            value: text.to_string(),
            layout: layout.to_string(),
            source,
        })
}

fn from_epoch(
    attribute: &str,
    text: &str,
    build: impl Fn(i64) -> Option<DateTime<Utc>>,
) -> Result<DateTime<Utc>, FrameError> {
    let epoch: i64 = text
        .parse()
        .map_err(|_| FrameError::InvalidNumericLiteral(text.to_string()))?;

    build(epoch).ok_or(FrameError::TimestampOutOfRange {
        attribute: attribute.to_string(),
        epoch,
    })
}
