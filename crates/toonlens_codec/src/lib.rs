//! Payload encoders for the toonlens workspace.
//!
//! Every encoder works on a plain [`serde_json::Value`] projection of the
//! payload, so JSON and TOON always describe exactly the same fields.
//!
//! - [`encode_json`]: the baseline, single-line JSON with spaced separators
//! - [`encode_toon`]: the compact indentation-based alternative, via `toon-format`
//! - [`decode_toon`]: reads TOON back, for checking that nothing was lost
//! - [`encode_both`]: projection plus both encoders in one call

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod dual;
mod json;
mod project;
mod toon;

pub use dual::{DualEncoding, encode_both};
pub use json::{decode_json, encode_json};
pub use project::to_plain;
pub use toon::{decode_toon, encode_toon};
