//! Pricing configuration for toonlens.
//!
//! Prices come from a bundled `toonlens.toml` merged with optional user
//! overrides. See [`PricingConfig::load`] for the precedence order.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;

pub use config::{DEFAULT_MODEL, PricingConfig};
