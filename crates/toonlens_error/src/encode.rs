//! Encoding error types.

/// Specific error conditions for payload encoding and decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum EncodeErrorKind {
    /// The value could not be projected into a plain mapping
    #[display("Cannot project value into a plain mapping: {}", _0)]
    Projection(String),

    /// The value contains a type the target format cannot represent
    #[display("Unsupported value: {}", _0)]
    Unsupported(String),

    /// TOON text the decoder rejected
    #[display("Malformed TOON: {}", _0)]
    Malformed(String),

    /// JSON text does not follow the grammar
    #[display("Syntax error on line {}: {}", line, message)]
    Syntax {
        /// 1-based line number of the offending input
        line: usize,
        /// What was wrong with it
        message: String,
    },
}

/// Encoding error with location tracking.
///
/// # Examples
///
/// ```
/// use toonlens_error::{EncodeError, EncodeErrorKind};
///
/// let err = EncodeError::new(EncodeErrorKind::Unsupported("NaN".to_string()));
/// assert!(format!("{}", err).contains("Unsupported value: NaN"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Encode Error: {} at line {} in {}", kind, line, file)]
pub struct EncodeError {
    /// The specific error condition
    pub kind: EncodeErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl EncodeError {
    /// Create a new EncodeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: EncodeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a syntax error at the given input line.
    #[track_caller]
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::new(EncodeErrorKind::Syntax {
            line,
            message: message.into(),
        })
    }
}

/// Result type for encoding operations.
pub type EncodeResult<T> = Result<T, EncodeError>;
