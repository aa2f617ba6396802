//! Test utilities for toonlens_models tests.

use toonlens_core::{ChatRequest, Message, Role};

/// Helper to create a small chat request using the builder pattern.
pub fn create_test_request(prompt: &str, model: &str, max_tokens: u32) -> ChatRequest {
    ChatRequest::builder()
        .model(model)
        .messages(vec![
            Message::new(Role::System, "Respond with 'Received' only."),
            Message::new(Role::User, prompt),
        ])
        .max_tokens(max_tokens)
        .build()
        .expect("Failed to build test request")
}
