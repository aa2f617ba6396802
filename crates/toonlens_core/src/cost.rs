//! Per-1000-token cost model.

use crate::TokenUsage;
use serde::{Deserialize, Serialize};

/// Input rate for gpt-4o: $2.50 per million tokens.
pub const GPT_4O_INPUT_PER_1K: f64 = 0.0025;

/// Output rate for gpt-4o: $10.00 per million tokens.
pub const GPT_4O_OUTPUT_PER_1K: f64 = 0.01;

/// USD pricing for one model, per 1000 tokens.
///
/// # Examples
///
/// ```
/// use toonlens_core::{ModelPricing, TokenUsage};
///
/// let pricing = ModelPricing::default();
/// let usage = TokenUsage::new(1000, 1000);
/// assert!((pricing.remote_cost(&usage) - 0.0125).abs() < 1e-12);
/// assert!((pricing.estimated_cost(2000) - 0.005).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(deny_unknown_fields)]
pub struct ModelPricing {
    /// Cost per 1000 input tokens in USD
    input_per_1k: f64,
    /// Cost per 1000 output tokens in USD
    output_per_1k: f64,
}

impl Default for ModelPricing {
    fn default() -> Self {
        Self {
            input_per_1k: GPT_4O_INPUT_PER_1K,
            output_per_1k: GPT_4O_OUTPUT_PER_1K,
        }
    }
}

impl ModelPricing {
    /// Creates pricing from per-1000-token rates.
    pub fn new(input_per_1k: f64, output_per_1k: f64) -> Self {
        Self {
            input_per_1k,
            output_per_1k,
        }
    }

    /// Creates pricing from per-million-token rates, the unit providers publish.
    pub fn per_million(input: f64, output: f64) -> Self {
        Self::new(input / 1000.0, output / 1000.0)
    }

    /// Validates that both rates are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid rate.
    pub fn validate(&self) -> Result<(), String> {
        if !self.input_per_1k.is_finite() || self.input_per_1k < 0.0 {
            return Err(format!(
                "Input rate must be a non-negative number, got {}",
                self.input_per_1k
            ));
        }
        if !self.output_per_1k.is_finite() || self.output_per_1k < 0.0 {
            return Err(format!(
                "Output rate must be a non-negative number, got {}",
                self.output_per_1k
            ));
        }
        Ok(())
    }

    /// Cost of `input_tokens` in and `output_tokens` out.
    pub fn cost(&self, input_tokens: u64, output_tokens: u64) -> f64 {
        (input_tokens as f64 / 1000.0) * self.input_per_1k
            + (output_tokens as f64 / 1000.0) * self.output_per_1k
    }

    /// Cost of a remotely measured request, split by input and output.
    pub fn remote_cost(&self, usage: &TokenUsage) -> f64 {
        self.cost(*usage.prompt_tokens(), *usage.completion_tokens())
    }

    /// Cost of a local estimate.
    ///
    /// There is no input/output split for an estimate, so the whole count is
    /// billed at the input rate.
    pub fn estimated_cost(&self, tokens: u64) -> f64 {
        self.cost(tokens, 0)
    }
}
