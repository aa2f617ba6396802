//! Test utilities for toonlens_compare tests.
//!
//! This module provides mock measurement backends and config helpers.

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockCounter, MockUsageDriver};

use toonlens_compare::ComparisonConfig;

/// Config for a small run, with or without a credential.
#[allow(dead_code)]
pub fn test_config(num_users: usize, api_key: Option<&str>) -> ComparisonConfig {
    let mut builder = ComparisonConfig::builder();
    builder.num_users(num_users).model("gpt-4o");
    if let Some(key) = api_key {
        builder.api_key(key);
    }
    builder.build().expect("Failed to build test config")
}
