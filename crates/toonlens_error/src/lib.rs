//! Error types for the toonlens workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The three families that matter to a comparison run:
//! - [`ConfigError`] rejects bad input before any work starts
//! - [`ModelsError`] describes remote or tokenizer failures; remote ones are
//!   recovered by falling back to local estimation
//! - [`EncodeError`] is always fatal, a partial serialization is never counted
//!
//! # Examples
//!
//! ```
//! use toonlens_error::{ToonlensResult, ConfigError};
//!
//! fn check_users(n: usize) -> ToonlensResult<usize> {
//!     if n == 0 {
//!         Err(ConfigError::new("num_users must be positive"))?
//!     }
//!     Ok(n)
//! }
//!
//! assert!(check_users(0).is_err());
//! assert_eq!(check_users(3).unwrap(), 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod encode;
mod error;
mod json;
mod models;

pub use config::ConfigError;
pub use encode::{EncodeError, EncodeErrorKind, EncodeResult};
pub use error::{ToonlensError, ToonlensErrorKind, ToonlensResult};
pub use json::JsonError;
pub use models::{ModelsError, ModelsErrorKind, ModelsResult};
