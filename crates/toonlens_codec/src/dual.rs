//! Encoding one payload into both formats.

use crate::{encode_json, encode_toon, to_plain};
use serde::Serialize;
use toonlens_core::Format;
use toonlens_error::EncodeResult;
use tracing::{debug, instrument};

/// The same payload rendered as JSON and as TOON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DualEncoding {
    /// Baseline JSON text
    pub json: String,
    /// TOON text
    pub toon: String,
}

impl DualEncoding {
    /// Text for one format.
    pub fn text(&self, format: Format) -> &str {
        match format {
            Format::Json => &self.json,
            Format::Toon => &self.toon,
        }
    }
}

/// Projects `payload` once and runs both encoders over the projection.
///
/// # Errors
///
/// Fails if the payload cannot be projected or either encoder rejects it.
/// No partial encoding is ever returned.
///
/// # Examples
///
/// ```
/// use toonlens_codec::encode_both;
/// use toonlens_core::generate_dummy_data;
///
/// let encoded = encode_both(&generate_dummy_data(1)).unwrap();
/// assert!(encoded.json.len() > encoded.toon.len());
/// ```
#[instrument(skip_all)]
pub fn encode_both<T: Serialize + ?Sized>(payload: &T) -> EncodeResult<DualEncoding> {
    let plain = to_plain(payload)?;
    let json = encode_json(&plain)?;
    let toon = encode_toon(&plain)?;

    debug!(
        json_chars = json.chars().count(),
        toon_chars = toon.chars().count(),
        "Encoded payload"
    );

    Ok(DualEncoding { json, toon })
}
