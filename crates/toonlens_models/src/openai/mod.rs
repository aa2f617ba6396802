//! OpenAI chat completions backend.

mod client;
mod dto;

pub use client::{OPENAI_API_URL, OpenAIClient};
pub use dto::{
    OpenAIChoice, OpenAIMessage, OpenAIMessageBuilder, OpenAIRequest, OpenAIRequestBuilder,
    OpenAIResponse, OpenAIResponseMessage, OpenAIUsage,
};
