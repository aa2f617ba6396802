//! Toonlens - JSON versus TOON token cost comparison
//!
//! Toonlens generates a realistic nested payload, encodes it as standard
//! JSON and as TOON (Token-Oriented Object Notation), and measures what
//! each encoding costs when sent to an LLM. Counts come from the model
//! provider's own usage accounting when an API key is available, and from a
//! local tokenizer otherwise.
//!
//! # Quick Start
//!
//! ```no_run
//! use toonlens::{ComparisonConfig, run_comparison};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ComparisonConfig::builder().num_users(10usize).build()?;
//!     let result = run_comparison(&config).await?;
//!
//!     println!(
//!         "JSON {} tokens, TOON {} tokens ({:.1}% saved)",
//!         result.json().tokens(),
//!         result.toon().tokens(),
//!         result.savings().percentage(),
//!     );
//!     Ok(())
//! }
//! ```
//!
//! # Cargo Features
//!
//! - `observability` - OpenTelemetry span export through a stdout exporter
//! - `api` - Enable tests that call the real API
//!
//! # Architecture
//!
//! - `toonlens_error` - Error types
//! - `toonlens_core` - Payload schema, generator, measurement and cost types
//! - `toonlens_interface` - `UsageDriver` and `TokenCounting` traits
//! - `toonlens_codec` - JSON and TOON encoders
//! - `toonlens_pricing` - Layered pricing configuration
//! - `toonlens_models` - OpenAI client and tiktoken counter
//! - `toonlens_compare` - Measurement state machine and comparison runs
//!
//! This crate (`toonlens`) re-exports everything for convenience.

pub use toonlens_codec::*;
pub use toonlens_compare::*;
pub use toonlens_core::*;
pub use toonlens_error::*;
pub use toonlens_interface::*;
pub use toonlens_models::*;
pub use toonlens_pricing::{PricingConfig, DEFAULT_MODEL as DEFAULT_PRICING_MODEL};

mod report;

pub use report::render_report;

// OpenTelemetry observability module
#[cfg(feature = "observability")]
pub mod observability;
