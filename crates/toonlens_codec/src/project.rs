//! Projection of typed values into a plain mapping.

use serde::Serialize;
use serde_json::Value;
use toonlens_error::{EncodeError, EncodeErrorKind, EncodeResult};

/// Projects any serializable value into a plain JSON value tree.
///
/// Timestamps become RFC 3339 strings through their serde impls, so both
/// encoders see the same normalized field set.
///
/// # Errors
///
/// Fails when the value has no plain-mapping representation, for example a
/// map keyed by tuples.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use toonlens_codec::to_plain;
///
/// let mut bad = BTreeMap::new();
/// bad.insert((1, 2), "pair");
/// assert!(to_plain(&bad).is_err());
/// ```
pub fn to_plain<T: Serialize + ?Sized>(value: &T) -> EncodeResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| EncodeError::new(EncodeErrorKind::Projection(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_finite_floats_project_to_null() {
        let value = to_plain(&vec![1.5, f64::NAN, f64::INFINITY]).unwrap();
        assert_eq!(value, json!([1.5, null, null]));
    }
}
