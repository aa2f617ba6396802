//! Chat request types sent to a measuring model.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single text message in a chat request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Author of the message
    pub role: Role,
    /// Message text
    pub content: String,
}

impl Message {
    /// Creates a message.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// A minimal chat completion request.
///
/// # Examples
///
/// ```
/// use toonlens_core::{ChatRequest, Message, Role};
///
/// let request = ChatRequest::builder()
///     .model("gpt-4o")
///     .messages(vec![Message::new(Role::User, "hi")])
///     .max_tokens(10u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.max_tokens, Some(10));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<Message>,
    /// Cap on generated tokens
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl ChatRequest {
    /// Creates a new builder.
    pub fn builder() -> ChatRequestBuilder {
        ChatRequestBuilder::default()
    }
}
