//! Per-format measurement results.

use crate::{ModelPricing, TokenUsage};
use serde::{Deserialize, Serialize};

/// Number of characters shown by [`MeasurementResult::preview`].
pub const PREVIEW_CHARS: usize = 200;

/// The two serializations being compared.
///
/// # Examples
///
/// ```
/// use toonlens_core::Format;
///
/// assert_eq!(Format::Json.to_string(), "json");
/// assert_eq!(Format::Toon.label(), "TOON");
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
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    /// Self-describing baseline with full key repetition
    Json,
    /// Compact tabular encoding
    Toon,
}

impl Format {
    /// Upper-case label used in prompts and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Format::Json => "JSON",
            Format::Toon => "TOON",
        }
    }
}

/// Where a token count came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    /// Counted by the remote model's own usage accounting
    #[display("remote")]
    Remote,
    /// Estimated offline with a local tokenizer
    #[display("estimated")]
    Estimated,
}

/// Token count and cost for one serialized payload.
///
/// `usage` is `Some` only when the count came from a live remote call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MeasurementResult {
    /// Which serialization was measured
    format: Format,
    /// The full serialized payload
    content: String,
    /// Total token count
    tokens: u64,
    /// USD cost
    cost: f64,
    /// Provider usage breakdown, absent for estimates
    usage: Option<TokenUsage>,
    /// How the count was obtained
    provenance: Provenance,
}

impl MeasurementResult {
    /// Builds a result from a remote call's usage accounting.
    ///
    /// The token count is the provider-reported total; cost applies input and
    /// output rates to their respective counts.
    pub fn remote(
        format: Format,
        content: impl Into<String>,
        usage: TokenUsage,
        pricing: &ModelPricing,
    ) -> Self {
        Self {
            format,
            content: content.into(),
            tokens: *usage.total_tokens(),
            cost: pricing.remote_cost(&usage),
            usage: Some(usage),
            provenance: Provenance::Remote,
        }
    }

    /// Builds a result from a local token estimate.
    ///
    /// # Examples
    ///
    /// ```
    /// use toonlens_core::{Format, MeasurementResult, ModelPricing, Provenance};
    ///
    /// let m = MeasurementResult::estimated(Format::Toon, "a: 1", 3, &ModelPricing::default());
    /// assert_eq!(*m.tokens(), 3);
    /// assert!(m.usage().is_none());
    /// assert_eq!(*m.provenance(), Provenance::Estimated);
    /// ```
    pub fn estimated(
        format: Format,
        content: impl Into<String>,
        tokens: u64,
        pricing: &ModelPricing,
    ) -> Self {
        Self {
            format,
            content: content.into(),
            tokens,
            cost: pricing.estimated_cost(tokens),
            usage: None,
            provenance: Provenance::Estimated,
        }
    }

    /// Whether this count came from a live remote call.
    pub fn is_remote(&self) -> bool {
        self.provenance == Provenance::Remote
    }

    /// The first [`PREVIEW_CHARS`] characters of the content followed by `...`.
    pub fn preview(&self) -> String {
        let head: String = self.content.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    }
}
