//! Trait definitions for token measurement backends.
//!
//! A comparison run measures each encoding through one of two seams:
//! [`UsageDriver`] asks a remote model for its own usage accounting, and
//! [`TokenCounting`] counts tokens locally without touching the network.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{TokenCounting, UsageDriver};
