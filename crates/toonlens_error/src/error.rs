//! Top-level error wrapper types.

use crate::{ConfigError, EncodeError, JsonError, ModelsError};

/// Every error a toonlens operation can surface.
///
/// # Examples
///
/// ```
/// use toonlens_error::{ModelsError, ModelsErrorKind, ToonlensError};
///
/// let models_err = ModelsError::new(ModelsErrorKind::Http("Connection failed".into()));
/// let err: ToonlensError = models_err.into();
/// assert!(format!("{}", err).contains("HTTP error: Connection failed"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ToonlensErrorKind {
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Payload encoding error
    #[from(EncodeError)]
    Encode(EncodeError),
    /// Model provider or tokenizer error
    #[from(ModelsError)]
    Models(ModelsError),
}

/// Toonlens error with kind discrimination.
///
/// # Examples
///
/// ```
/// use toonlens_error::{ToonlensError, ToonlensErrorKind, ToonlensResult, ConfigError};
///
/// fn might_fail() -> ToonlensResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), ToonlensErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Toonlens Error: {}", _0)]
pub struct ToonlensError(Box<ToonlensErrorKind>);

impl ToonlensError {
    /// Create a new error from a kind.
    pub fn new(kind: ToonlensErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ToonlensErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ToonlensErrorKind
impl<T> From<T> for ToonlensError
where
    T: Into<ToonlensErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for toonlens operations.
///
/// # Examples
///
/// ```
/// use toonlens_error::{ToonlensResult, JsonError};
///
/// fn parse_report() -> ToonlensResult<String> {
///     Err(JsonError::new("expected value at line 1"))?
/// }
/// ```
pub type ToonlensResult<T> = std::result::Result<T, ToonlensError>;
