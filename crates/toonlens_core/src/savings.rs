//! Savings between a baseline and an alternative measurement.

use crate::MeasurementResult;
use serde::{Deserialize, Serialize};

/// Difference between a baseline and a cheaper (or not) alternative.
///
/// Deltas are signed: a negative value means the alternative was larger.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct SavingsSummary {
    /// baseline.tokens − alternative.tokens
    tokens: i64,
    /// baseline.cost − alternative.cost
    cost: f64,
    /// tokens / baseline.tokens × 100, or 0 when the baseline is empty
    percentage: f64,
}

impl SavingsSummary {
    /// Computes savings from raw token counts and costs.
    ///
    /// # Examples
    ///
    /// ```
    /// use toonlens_core::SavingsSummary;
    ///
    /// let s = SavingsSummary::from_counts(200, 0.5, 150, 0.375);
    /// assert_eq!(*s.tokens(), 50);
    /// assert_eq!(*s.percentage(), 25.0);
    ///
    /// let empty = SavingsSummary::from_counts(0, 0.0, 10, 0.1);
    /// assert_eq!(*empty.tokens(), -10);
    /// assert_eq!(*empty.percentage(), 0.0);
    /// ```
    pub fn from_counts(
        baseline_tokens: u64,
        baseline_cost: f64,
        alternative_tokens: u64,
        alternative_cost: f64,
    ) -> Self {
        let tokens = baseline_tokens as i64 - alternative_tokens as i64;
        let percentage = if baseline_tokens == 0 {
            0.0
        } else {
            tokens as f64 / baseline_tokens as f64 * 100.0
        };

        Self {
            tokens,
            cost: baseline_cost - alternative_cost,
            percentage,
        }
    }

    /// Computes savings of `alternative` relative to `baseline`.
    pub fn between(baseline: &MeasurementResult, alternative: &MeasurementResult) -> Self {
        Self::from_counts(
            *baseline.tokens(),
            *baseline.cost(),
            *alternative.tokens(),
            *alternative.cost(),
        )
    }
}
