//! OpenAI chat completions data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use toonlens_core::{ChatRequest, Role, TokenUsage};

/// One message in a chat completions request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct OpenAIMessage {
    /// Message role
    role: Role,
    /// Message content
    content: String,
}

impl OpenAIMessage {
    /// Creates a new builder for `OpenAIMessage`.
    pub fn builder() -> OpenAIMessageBuilder {
        OpenAIMessageBuilder::default()
    }
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct OpenAIRequest {
    /// Model identifier
    model: String,
    /// Conversation messages
    messages: Vec<OpenAIMessage>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl OpenAIRequest {
    /// Creates a new builder for `OpenAIRequest`.
    pub fn builder() -> OpenAIRequestBuilder {
        OpenAIRequestBuilder::default()
    }
}

impl From<&ChatRequest> for OpenAIRequest {
    fn from(req: &ChatRequest) -> Self {
        Self {
            model: req.model.clone(),
            messages: req
                .messages
                .iter()
                .map(|m| OpenAIMessage {
                    role: m.role,
                    content: m.content.clone(),
                })
                .collect(),
            max_tokens: req.max_tokens,
        }
    }
}

/// Usage accounting returned with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct OpenAIUsage {
    /// Tokens billed for the prompt
    prompt_tokens: u64,
    /// Tokens generated
    completion_tokens: u64,
    /// Provider-reported total
    total_tokens: u64,
}

impl From<OpenAIUsage> for TokenUsage {
    fn from(usage: OpenAIUsage) -> Self {
        TokenUsage::with_total(
            usage.prompt_tokens,
            usage.completion_tokens,
            usage.total_tokens,
        )
    }
}

/// Message returned in a choice.
///
/// Content is absent on refusals and tool calls, and the role is kept as
/// text so unfamiliar roles never fail the parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct OpenAIResponseMessage {
    /// Message role
    #[serde(default)]
    role: Option<String>,
    /// Message content
    #[serde(default)]
    content: Option<String>,
}

/// One generated choice.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct OpenAIChoice {
    /// Generated message
    #[serde(default)]
    message: Option<OpenAIResponseMessage>,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Response body from `POST /chat/completions`.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct OpenAIResponse {
    /// Completion identifier
    #[serde(default)]
    id: Option<String>,
    /// Model that served the request
    #[serde(default)]
    model: Option<String>,
    /// Generated choices
    #[serde(default)]
    choices: Vec<OpenAIChoice>,
    /// Token usage, absent on some compatible servers
    #[serde(default)]
    usage: Option<OpenAIUsage>,
}
