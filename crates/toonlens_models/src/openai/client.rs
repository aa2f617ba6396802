use crate::{OpenAIRequest, OpenAIResponse, UsageMetrics, classify_error};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Instant;
use toonlens_core::{ChatRequest, TokenUsage};
use toonlens_error::{ModelsError, ModelsErrorKind, ModelsResult};
use toonlens_interface::UsageDriver;
use tracing::{debug, error, instrument, warn};

/// Default OpenAI API base URL.
pub const OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// Client for OpenAI-compatible chat completions endpoints.
#[derive(Clone)]
pub struct OpenAIClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for OpenAIClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl OpenAIClient {
    /// Creates a client for the public OpenAI API.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Bearer token sent with every request
    pub fn new(api_key: impl Into<String>) -> Self {
        debug!("Creating new OpenAI client");
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: OPENAI_API_URL.to_string(),
        }
    }

    /// Points the client at another OpenAI-compatible server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Sends a chat completions request.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn chat(&self, request: &OpenAIRequest) -> ModelsResult<OpenAIResponse> {
        debug!(url = %self.completions_url(), "Sending request to OpenAI API");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to OpenAI API");
                let message = if e.is_timeout() {
                    format!("Request timed out: {}", e)
                } else {
                    format!("Request failed: {}", e)
                };
                ModelsError::new(ModelsErrorKind::Http(message))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = %status, body = %body, "OpenAI API returned error");
            return Err(status_error(status, body));
        }

        let parsed: OpenAIResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse OpenAI response");
            ModelsError::new(ModelsErrorKind::ResponseParsing(e.to_string()))
        })?;

        debug!(response_id = ?parsed.id(), "Received response from OpenAI");
        Ok(parsed)
    }
}

/// Maps a non-success status to an error kind.
fn status_error(status: StatusCode, body: String) -> ModelsError {
    let kind = match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ModelsErrorKind::Authentication(body),
        StatusCode::TOO_MANY_REQUESTS => ModelsErrorKind::RateLimit,
        _ => ModelsErrorKind::Api {
            status: status.as_u16(),
            message: body,
        },
    };
    ModelsError::new(kind)
}

#[async_trait]
impl UsageDriver for OpenAIClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %req.model))]
    async fn usage(&self, req: &ChatRequest) -> ModelsResult<TokenUsage> {
        let metrics = UsageMetrics::get();
        let started = Instant::now();

        let result = self.chat(&OpenAIRequest::from(req)).await.and_then(|resp| {
            resp.usage()
                .map(TokenUsage::from)
                .ok_or_else(|| ModelsError::new(ModelsErrorKind::MissingUsage))
        });

        match &result {
            Ok(usage) => {
                metrics.record_request(self.provider_name(), &req.model, started.elapsed());
                metrics.record_tokens(&req.model, usage);
            }
            Err(e) => {
                let error_type = classify_error(e);
                warn!(error_type, error = %e, "Usage request failed");
                metrics.record_error(self.provider_name(), &req.model, error_type);
            }
        }

        result
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn endpoint(&self) -> &str {
        &self.base_url
    }
}
