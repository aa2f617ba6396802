//! Model provider errors.

/// Model provider-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// Transport-level failure (connection refused, DNS, timeout)
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Non-success status returned by the provider
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or provider message
        message: String,
    },

    /// Credential rejected (401/403)
    #[display("Authentication failed: {}", _0)]
    Authentication(String),

    /// Quota or rate limit exceeded (429)
    #[display("Rate limit exceeded")]
    RateLimit,

    /// Response body could not be parsed
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),

    /// Response parsed but carried no usage accounting
    #[display("Response did not include token usage")]
    MissingUsage,

    /// Local tokenizer could not be loaded
    #[display("Token counting failed: {}", _0)]
    TokenCountingFailed(String),

    /// Builder error (derive_builder failures)
    #[display("Builder error: {}", _0)]
    Builder(String),
}

/// Model provider error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
