//! Provider-reported token usage.

use serde::{Deserialize, Serialize};

/// Token usage reported by a remote model for a single request.
///
/// This is only ever built from the provider's own accounting. Local
/// estimates have no usage breakdown.
///
/// # Examples
///
/// ```
/// use toonlens_core::TokenUsage;
///
/// let usage = TokenUsage::new(150, 3);
/// assert_eq!(*usage.total_tokens(), 153);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct TokenUsage {
    /// Tokens in the prompt/input.
    prompt_tokens: u64,
    /// Tokens in the response/output.
    completion_tokens: u64,
    /// Total tokens as accounted by the provider.
    total_tokens: u64,
}

impl TokenUsage {
    /// Create a usage record whose total is prompt + completion.
    pub fn new(prompt_tokens: u64, completion_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }

    /// Create a usage record with a provider-supplied total.
    ///
    /// Providers may account totals differently from prompt + completion, so
    /// the reported total is kept as-is.
    pub fn with_total(prompt_tokens: u64, completion_tokens: u64, total_tokens: u64) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_usage_new() {
        let usage = TokenUsage::new(100, 50);
        assert_eq!(usage.prompt_tokens, 100);
        assert_eq!(usage.completion_tokens, 50);
        assert_eq!(usage.total_tokens, 150);
    }

    #[test]
    fn test_token_usage_keeps_reported_total() {
        let usage = TokenUsage::with_total(100, 50, 151);
        assert_eq!(*usage.total_tokens(), 151);
    }
}
