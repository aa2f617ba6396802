//! Core data types for the toonlens workspace.
//!
//! This crate holds the synthetic payload schema and its generator, the
//! chat request types sent to a measuring model, and the measurement,
//! cost, and savings types a comparison run produces.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod comparison;
mod cost;
mod generator;
mod measurement;
mod payload;
mod request;
mod role;
mod savings;
mod usage;

pub use comparison::ComparisonResult;
pub use cost::{GPT_4O_INPUT_PER_1K, GPT_4O_OUTPUT_PER_1K, ModelPricing};
pub use generator::{ACTIVITIES_PER_USER, SCORES_PER_USER, generate_dummy_data, generate_payload};
pub use measurement::{Format, MeasurementResult, PREVIEW_CHARS, Provenance};
pub use payload::{Activity, DEFAULT_MAX_SCORE, DataPayload, PAYLOAD_VERSION, Score, UserProfile};
pub use request::{ChatRequest, ChatRequestBuilder, ChatRequestBuilderError, Message};
pub use role::Role;
pub use savings::SavingsSummary;
pub use usage::TokenUsage;
