//! TOON (Token-Oriented Object Notation) encoding.
//!
//! TOON drops braces and most quotes, uses indentation for nesting, and
//! writes arrays of uniform objects as a table: one header naming the
//! fields, then one comma-separated row per element.
//!
//! ```text
//! users[2]:
//!   - id: 0
//!     scores[2]{subject,score}:
//!       Math,91.5
//!       Art,77
//! ```
//!
//! Both directions go through the `toon-format` crate with its default
//! options (two-space indent, comma delimiter, strict length checks).

use serde_json::Value;
use toonlens_error::{EncodeError, EncodeErrorKind, EncodeResult};

/// Encodes a projected value as TOON.
///
/// # Errors
///
/// Fails if the value holds something TOON cannot represent.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toonlens_codec::encode_toon;
///
/// let value = json!({"id": 7, "tags": ["a", "b"]});
/// assert_eq!(encode_toon(&value).unwrap(), "id: 7\ntags[2]: a,b");
/// ```
pub fn encode_toon(value: &Value) -> EncodeResult<String> {
    toon_format::encode_default(value)
        .map_err(|e| EncodeError::new(EncodeErrorKind::Unsupported(e.to_string())))
}

/// Decodes TOON text back into a plain value.
///
/// # Errors
///
/// Fails with [`EncodeErrorKind::Malformed`] when the text does not parse,
/// including when a declared array length disagrees with its contents.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use toonlens_codec::decode_toon;
///
/// let value = decode_toon("scores[2]{subject,score}:\n  Math,91.5\n  Art,77").unwrap();
/// assert_eq!(
///     value,
///     json!({"scores": [{"subject": "Math", "score": 91.5}, {"subject": "Art", "score": 77}]})
/// );
/// ```
pub fn decode_toon(text: &str) -> EncodeResult<Value> {
    toon_format::decode_default(text)
        .map_err(|e| EncodeError::new(EncodeErrorKind::Malformed(e.to_string())))
}
