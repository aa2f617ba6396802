//! Configuration error types.

/// Configuration error with source location.
///
/// Raised before any payload is generated: out-of-range user counts,
/// empty model names, unreadable pricing files.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use toonlens_error::ConfigError;
    ///
    /// let err = ConfigError::new("num_users must be between 1 and 50, got 0");
    /// assert!(err.message.contains("num_users"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
