//! JSON versus TOON comparison engine.
//!
//! A run generates a synthetic payload, encodes it both ways, and measures
//! each encoding either through a remote model's usage accounting or with
//! a local tokenizer:
//!
//! 1. [`ComparisonConfig`] is validated (user count, model name)
//! 2. [`toonlens_core::generate_dummy_data`] builds the payload
//! 3. [`toonlens_codec::encode_both`] renders JSON and TOON
//! 4. [`MeasurementService`] measures both, falling back to local counts
//!    for the whole run if any remote call fails
//!
//! Calls are awaited one after another, JSON first. There are no retries.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod measurement;
mod prompt;
mod run;

pub use config::{
    API_KEY_ENV, BASE_URL_ENV, ComparisonConfig, ComparisonConfigBuilder,
    ComparisonConfigBuilderError, DEFAULT_MODEL, DEFAULT_NUM_USERS, MAX_USERS, MIN_USERS,
};
pub use measurement::{MeasurementMode, MeasurementService, Measurements};
pub use prompt::{MAX_RESPONSE_TOKENS, measurement_request, system_prompt, user_prompt};
pub use run::{compare_payload, run_comparison, run_comparison_with};
