//! Measurement traits.

use async_trait::async_trait;
use toonlens_core::{ChatRequest, TokenUsage};
use toonlens_error::ModelsResult;

/// A backend that reports token usage for a chat request.
///
/// Implementations send the request and return only the provider's usage
/// accounting; the completion text itself is discarded.
#[async_trait]
pub trait UsageDriver: Send + Sync {
    /// Send `req` and return the usage the provider billed for it.
    async fn usage(&self, req: &ChatRequest) -> ModelsResult<TokenUsage>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Base URL requests are sent to.
    fn endpoint(&self) -> &str;
}

/// Local, deterministic token counting.
pub trait TokenCounting: Send + Sync {
    /// Count tokens in `text` with the tokenizer `model` would use.
    fn count_tokens(&self, model: &str, text: &str) -> ModelsResult<u64>;
}
