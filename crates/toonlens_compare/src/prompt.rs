//! Requests sent to measure one encoding.

use toonlens_core::{ChatRequest, Format, Message, Role};
use toonlens_error::{ModelsError, ModelsErrorKind, ModelsResult};

/// Completion budget for a measurement request.
///
/// The reply is irrelevant; only the prompt's billed tokens matter.
pub const MAX_RESPONSE_TOKENS: u32 = 10;

/// System instruction for `format`.
pub fn system_prompt(format: Format) -> &'static str {
    match format {
        Format::Json => "You are a data parser. Respond with 'Received' only.",
        Format::Toon => {
            "You are a data parser. The user provides data in TOON format. \
             Respond with 'Received' only."
        }
    }
}

/// User message carrying the full encoded payload.
pub fn user_prompt(format: Format, payload: &str) -> String {
    format!("Process this {} data:\n{}", format.label(), payload)
}

/// Builds the chat request that measures `payload` encoded as `format`.
///
/// # Examples
///
/// ```
/// use toonlens_compare::{MAX_RESPONSE_TOKENS, measurement_request};
/// use toonlens_core::Format;
///
/// let req = measurement_request(Format::Toon, "gpt-4o", "a: 1").unwrap();
/// assert_eq!(req.messages.len(), 2);
/// assert_eq!(req.messages[1].content, "Process this TOON data:\na: 1");
/// assert_eq!(req.max_tokens, Some(MAX_RESPONSE_TOKENS));
/// ```
pub fn measurement_request(
    format: Format,
    model: &str,
    payload: &str,
) -> ModelsResult<ChatRequest> {
    ChatRequest::builder()
        .model(model)
        .messages(vec![
            Message::new(Role::System, system_prompt(format)),
            Message::new(Role::User, user_prompt(format, payload)),
        ])
        .max_tokens(MAX_RESPONSE_TOKENS)
        .build()
        .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_are_format_specific() {
        assert_eq!(
            system_prompt(Format::Toon),
            "You are a data parser. The user provides data in TOON format. Respond with 'Received' only."
        );
        assert_eq!(user_prompt(Format::Json, "{}"), "Process this JSON data:\n{}");
    }
}
