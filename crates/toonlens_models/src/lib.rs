//! Token measurement backends for toonlens.
//!
//! - [`OpenAIClient`] implements [`toonlens_interface::UsageDriver`] against
//!   any OpenAI-compatible chat completions endpoint and reports the
//!   provider's own usage accounting.
//! - [`TiktokenCounter`] implements [`toonlens_interface::TokenCounting`]
//!   offline with tiktoken.
//!
//! # Example
//!
//! ```no_run
//! use toonlens_core::{ChatRequest, Message, Role};
//! use toonlens_interface::UsageDriver;
//! use toonlens_models::OpenAIClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAIClient::new(std::env::var("OPENAI_API_KEY")?);
//! let request = ChatRequest::builder()
//!     .model("gpt-4o")
//!     .messages(vec![Message::new(Role::User, "Hello")])
//!     .max_tokens(10u32)
//!     .build()?;
//! let usage = client.usage(&request).await?;
//! println!("{} tokens", usage.total_tokens());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod metrics;
mod openai;
mod token_counting;

pub use metrics::{UsageMetrics, classify_error};
pub use openai::{
    OPENAI_API_URL, OpenAIChoice, OpenAIClient, OpenAIMessage, OpenAIMessageBuilder,
    OpenAIRequest, OpenAIRequestBuilder, OpenAIResponse, OpenAIResponseMessage, OpenAIUsage,
};
pub use token_counting::{FALLBACK_ENCODING, TiktokenCounter};
