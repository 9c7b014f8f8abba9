//! Numeric sub-parsing of decimal text carried in number-tagged values.

use crate::error::FrameError;

/// The outcome of classifying one numeric literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// Parses numeric text with the integer-then-float rule: a full-string base-10
/// signed 64-bit parse wins; otherwise a float parse; otherwise the literal is
/// invalid.
///
/// An integer literal that overflows `i64` falls through to the float path,
/// so oversized numbers lose precision rather than failing the build.
pub fn parse_number(text: &str) -> Result<Number, FrameError> {
    if let Ok(i) = text.parse::<i64>() {
        return Ok(Number::Int(i));
    }

    match text.parse::<f64>() {
        Ok(f) => Ok(Number::Float(f)),
        Err(_) => Err(FrameError::InvalidNumericLiteral(text.to_string())),
    }
}
