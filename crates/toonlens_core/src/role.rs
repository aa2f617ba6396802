//! Role types for chat participants.

use serde::{Deserialize, Serialize};

/// Chat message author.
///
/// # Examples
///
/// ```
/// use toonlens_core::Role;
///
/// assert_eq!(format!("{}", Role::System), "system");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Fixed instructions
    #[display("system")]
    System,
    /// The payload being measured
    #[display("user")]
    User,
    /// Model replies
    #[display("assistant")]
    Assistant,
}
