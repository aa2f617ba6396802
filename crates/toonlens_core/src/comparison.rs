//! The result bundle of one comparison run.

use crate::{Format, MeasurementResult, SavingsSummary};
use serde::{Deserialize, Serialize};

/// Both measurements, their savings, and how they were obtained.
///
/// `api_called` describes the run as a whole: it is true only when every
/// measurement came from a live remote call. Each [`MeasurementResult`]
/// also records its own provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ComparisonResult {
    /// Model the payloads were measured against
    model: String,
    /// Baseline measurement
    json: MeasurementResult,
    /// Compact measurement
    toon: MeasurementResult,
    /// Savings of TOON relative to JSON
    savings: SavingsSummary,
    /// Whether the run used the remote model's accounting
    api_called: bool,
}

impl ComparisonResult {
    /// Assembles a result, computing savings of `toon` relative to `json`.
    pub fn new(
        model: impl Into<String>,
        json: MeasurementResult,
        toon: MeasurementResult,
        api_called: bool,
    ) -> Self {
        let savings = SavingsSummary::between(&json, &toon);
        Self {
            model: model.into(),
            json,
            toon,
            savings,
            api_called,
        }
    }

    /// The measurement for `format`.
    pub fn measurement(&self, format: Format) -> &MeasurementResult {
        match format {
            Format::Json => &self.json,
            Format::Toon => &self.toon,
        }
    }
}
