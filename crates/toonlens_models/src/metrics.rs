//! Metrics for usage requests.
//!
//! Provides OpenTelemetry-based metrics for tracking usage request latency,
//! failures, and billed tokens. Instruments are no-ops until a meter
//! provider is installed globally.

use opentelemetry::{
    KeyValue, global,
    metrics::{Counter, Histogram, Meter},
};
use std::sync::OnceLock;
use std::time::Duration;
use toonlens_core::TokenUsage;
use toonlens_error::{ModelsError, ModelsErrorKind};

static METRICS: OnceLock<UsageMetrics> = OnceLock::new();

/// Metrics for remote usage requests.
#[derive(Clone)]
pub struct UsageMetrics {
    /// Meter handle kept alive for metric instruments
    _meter: Meter,
    /// Successful usage requests
    pub requests: Counter<u64>,
    /// Failed usage requests
    pub errors: Counter<u64>,
    /// Request duration in seconds
    pub duration: Histogram<f64>,
    /// Prompt tokens billed
    pub prompt_tokens: Counter<u64>,
    /// Completion tokens billed
    pub completion_tokens: Counter<u64>,
}

impl UsageMetrics {
    fn init() -> Self {
        let meter = global::meter("toonlens");

        Self {
            _meter: meter.clone(),
            requests: meter
                .u64_counter("toonlens.requests")
                .with_description("Successful usage requests")
                .build(),
            errors: meter
                .u64_counter("toonlens.errors")
                .with_description("Failed usage requests")
                .build(),
            duration: meter
                .f64_histogram("toonlens.duration")
                .with_unit("s")
                .with_description("Usage request duration")
                .build(),
            prompt_tokens: meter
                .u64_counter("toonlens.tokens.prompt")
                .with_description("Prompt tokens billed")
                .build(),
            completion_tokens: meter
                .u64_counter("toonlens.tokens.completion")
                .with_description("Completion tokens billed")
                .build(),
        }
    }

    /// Get the global metrics instance.
    pub fn get() -> &'static Self {
        METRICS.get_or_init(Self::init)
    }

    /// Record a successful request.
    pub fn record_request(&self, provider: &str, model: &str, elapsed: Duration) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
        ];
        self.requests.add(1, labels);
        self.duration.record(elapsed.as_secs_f64(), labels);
    }

    /// Record a failed request.
    pub fn record_error(&self, provider: &str, model: &str, error_type: &'static str) {
        let labels = &[
            KeyValue::new("provider", provider.to_string()),
            KeyValue::new("model", model.to_string()),
            KeyValue::new("error_type", error_type),
        ];
        self.errors.add(1, labels);
    }

    /// Record billed tokens.
    pub fn record_tokens(&self, model: &str, usage: &TokenUsage) {
        let labels = &[KeyValue::new("model", model.to_string())];
        self.prompt_tokens.add(*usage.prompt_tokens(), labels);
        self.completion_tokens.add(*usage.completion_tokens(), labels);
    }
}

/// Classify an error for log and metric labels.
///
/// Returns one of: "rate_limit", "auth", "network", "timeout",
/// "invalid_request", "server", "malformed_response", "tokenizer"
///
/// # Examples
///
/// ```
/// use toonlens_error::{ModelsError, ModelsErrorKind};
/// use toonlens_models::classify_error;
///
/// let err = ModelsError::new(ModelsErrorKind::RateLimit);
/// assert_eq!(classify_error(&err), "rate_limit");
/// ```
pub fn classify_error(error: &ModelsError) -> &'static str {
    match &error.kind {
        ModelsErrorKind::RateLimit => "rate_limit",
        ModelsErrorKind::Authentication(_) => "auth",
        ModelsErrorKind::Http(msg) if msg.to_lowercase().contains("timed out") => "timeout",
        ModelsErrorKind::Http(_) => "network",
        ModelsErrorKind::Api { status, .. } if *status < 500 => "invalid_request",
        ModelsErrorKind::Api { .. } => "server",
        ModelsErrorKind::ResponseParsing(_) | ModelsErrorKind::MissingUsage => {
            "malformed_response"
        }
        ModelsErrorKind::TokenCountingFailed(_) => "tokenizer",
        ModelsErrorKind::Builder(_) => "invalid_request",
    }
}
