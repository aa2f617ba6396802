//! Token measurement with whole-run fallback.
//!
//! A service starts in [`MeasurementMode::Remote`] when it has a usage
//! driver and in [`MeasurementMode::Local`] otherwise. Any remote failure,
//! on either format, drops the entire run to local counting so both sides
//! of a comparison are always measured the same way.

use toonlens_codec::DualEncoding;
use toonlens_core::{Format, MeasurementResult, ModelPricing};
use toonlens_error::{ModelsResult, ToonlensResult};
use toonlens_interface::{TokenCounting, UsageDriver};
use toonlens_models::classify_error;
use tracing::{Instrument, Span, debug, info, info_span, instrument, warn};

use crate::measurement_request;

/// How a run measures tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum MeasurementMode {
    /// Provider usage accounting from live calls
    Remote,
    /// Local tokenizer estimate
    Local,
}

/// Measurements of both encodings from one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurements {
    /// Baseline measurement
    pub json: MeasurementResult,
    /// Compact measurement
    pub toon: MeasurementResult,
    /// Whether both came from live remote calls
    pub api_called: bool,
}

/// Measures encoded payloads against one model.
pub struct MeasurementService<'a> {
    driver: Option<&'a dyn UsageDriver>,
    counter: &'a dyn TokenCounting,
    model: &'a str,
    pricing: ModelPricing,
}

impl std::fmt::Debug for MeasurementService<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MeasurementService")
            .field("mode", &self.mode())
            .field("model", &self.model)
            .field("pricing", &self.pricing)
            .finish()
    }
}

fn request_span(format: Format) -> Span {
    match format {
        Format::Json => info_span!("json_format_request", format = "json"),
        Format::Toon => info_span!("toon_format_request", format = "toon"),
    }
}

impl<'a> MeasurementService<'a> {
    /// Creates a service. Passing no driver forces local counting.
    pub fn new(
        driver: Option<&'a dyn UsageDriver>,
        counter: &'a dyn TokenCounting,
        model: &'a str,
        pricing: ModelPricing,
    ) -> Self {
        Self {
            driver,
            counter,
            model,
            pricing,
        }
    }

    /// Mode the service starts in.
    pub fn mode(&self) -> MeasurementMode {
        if self.driver.is_some() {
            MeasurementMode::Remote
        } else {
            MeasurementMode::Local
        }
    }

    /// Measures both encodings, JSON first.
    ///
    /// Remote failures are logged and recovered by counting locally.
    ///
    /// # Errors
    ///
    /// Fails only when the local tokenizer cannot be loaded.
    #[instrument(skip_all, fields(model = %self.model, mode = %self.mode()))]
    pub async fn measure(&self, encoded: &DualEncoding) -> ToonlensResult<Measurements> {
        if let Some(driver) = self.driver {
            match self.measure_remote(driver, encoded).await {
                Ok((json, toon)) => {
                    info!(
                        json_tokens = json.tokens(),
                        toon_tokens = toon.tokens(),
                        "Measured with remote usage"
                    );
                    return Ok(Measurements {
                        json,
                        toon,
                        api_called: true,
                    });
                }
                Err(e) => {
                    warn!(
                        error = %e,
                        error_type = classify_error(&e),
                        provider = driver.provider_name(),
                        "Remote measurement failed, falling back to local estimates"
                    );
                }
            }
        }

        let json = self.measure_local(Format::Json, &encoded.json)?;
        let toon = self.measure_local(Format::Toon, &encoded.toon)?;
        info!(
            json_tokens = json.tokens(),
            toon_tokens = toon.tokens(),
            "Measured with local estimates"
        );
        Ok(Measurements {
            json,
            toon,
            api_called: false,
        })
    }

    async fn measure_remote(
        &self,
        driver: &dyn UsageDriver,
        encoded: &DualEncoding,
    ) -> ModelsResult<(MeasurementResult, MeasurementResult)> {
        let json = self.measure_remote_one(driver, Format::Json, &encoded.json).await?;
        let toon = self.measure_remote_one(driver, Format::Toon, &encoded.toon).await?;
        Ok((json, toon))
    }

    async fn measure_remote_one(
        &self,
        driver: &dyn UsageDriver,
        format: Format,
        text: &str,
    ) -> ModelsResult<MeasurementResult> {
        let request = measurement_request(format, self.model, text)?;
        let usage = driver
            .usage(&request)
            .instrument(request_span(format))
            .await?;
        debug!(
            format = %format,
            prompt_tokens = usage.prompt_tokens(),
            completion_tokens = usage.completion_tokens(),
            total_tokens = usage.total_tokens(),
            "Remote usage"
        );
        Ok(MeasurementResult::remote(format, text, usage, &self.pricing))
    }

    fn measure_local(&self, format: Format, text: &str) -> ModelsResult<MeasurementResult> {
        let span = request_span(format);
        let _entered = span.enter();

        let tokens = self.counter.count_tokens(self.model, text)?;
        debug!(tokens, "Local estimate");
        Ok(MeasurementResult::estimated(format, text, tokens, &self.pricing))
    }
}
