//! JSON baseline encoding.

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::Formatter;
use std::io;
use toonlens_error::{EncodeError, EncodeErrorKind, EncodeResult};

/// Single-line JSON with a space after every `,` and `:`.
///
/// This is the layout most JSON emitters default to, and what an API
/// caller would typically paste into a prompt.
#[derive(Debug, Clone, Copy, Default)]
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Encodes a plain value as baseline JSON.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toonlens_codec::encode_json;
///
/// let text = encode_json(&json!({"id": 1, "tags": ["a", "b"]})).unwrap();
/// assert_eq!(text, r#"{"id": 1, "tags": ["a", "b"]}"#);
/// ```
pub fn encode_json(value: &Value) -> EncodeResult<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    value
        .serialize(&mut ser)
        .map_err(|e| EncodeError::new(EncodeErrorKind::Unsupported(e.to_string())))?;
    String::from_utf8(buf)
        .map_err(|e| EncodeError::new(EncodeErrorKind::Unsupported(e.to_string())))
}

/// Parses baseline JSON back into a plain value.
pub fn decode_json(text: &str) -> EncodeResult<Value> {
    serde_json::from_str(text).map_err(|e| EncodeError::syntax(e.line(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_spacing() {
        let text = encode_json(&json!({"a": {"b": [1, {"c": null}]}, "d": true})).unwrap();
        assert_eq!(text, r#"{"a": {"b": [1, {"c": null}]}, "d": true}"#);
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(encode_json(&json!({})).unwrap(), "{}");
        assert_eq!(encode_json(&json!([])).unwrap(), "[]");
    }

    #[test]
    fn test_decode_reports_line() {
        let err = decode_json("{\n\"a\": }").unwrap_err();
        assert!(matches!(err.kind, EncodeErrorKind::Syntax { line: 2, .. }));
    }
}
