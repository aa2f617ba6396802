//! End-to-end comparison runs.

use crate::{ComparisonConfig, MeasurementService};
use toonlens_codec::encode_both;
use toonlens_core::{ComparisonResult, DataPayload, generate_dummy_data};
use toonlens_error::ToonlensResult;
use toonlens_interface::{TokenCounting, UsageDriver};
use toonlens_models::{OpenAIClient, TiktokenCounter};
use tracing::{info, instrument};

/// Runs a comparison with the production backends.
///
/// Builds an [`OpenAIClient`] when the configuration carries a credential
/// and always counts locally with a [`TiktokenCounter`] as the fallback.
///
/// # Errors
///
/// Fails on invalid configuration, encoding failure, or when the local
/// tokenizer cannot be loaded. Remote failures never escape.
///
/// # Example
///
/// ```no_run
/// use toonlens_compare::{ComparisonConfig, run_comparison};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ComparisonConfig::builder().num_users(5usize).build()?;
/// let result = run_comparison(&config).await?;
/// println!("TOON saves {:.1}%", result.savings().percentage());
/// # Ok(())
/// # }
/// ```
pub async fn run_comparison(config: &ComparisonConfig) -> ToonlensResult<ComparisonResult> {
    let client = config
        .api_key()
        .as_ref()
        .map(|key| OpenAIClient::new(key.as_str()).with_base_url(config.base_url().as_str()));
    let counter = TiktokenCounter::new();

    run_comparison_with(
        config,
        client.as_ref().map(|c| c as &dyn UsageDriver),
        &counter,
    )
    .await
}

/// Runs a comparison against caller-supplied backends.
///
/// Generates a fresh payload with the thread-local RNG; use
/// [`compare_payload`] to measure a payload you already have.
///
/// # Errors
///
/// Same as [`run_comparison`].
#[instrument(
    name = "compare_formats",
    skip_all,
    fields(model = %config.model(), num_users = config.num_users())
)]
pub async fn run_comparison_with(
    config: &ComparisonConfig,
    driver: Option<&dyn UsageDriver>,
    counter: &dyn TokenCounting,
) -> ToonlensResult<ComparisonResult> {
    config.validate()?;
    let payload = generate_dummy_data(*config.num_users());
    compare_payload(config, &payload, driver, counter).await
}

/// Encodes and measures an existing payload.
///
/// The user count in `config` is not consulted.
///
/// # Errors
///
/// Same as [`run_comparison`], minus user count validation.
pub async fn compare_payload(
    config: &ComparisonConfig,
    payload: &DataPayload,
    driver: Option<&dyn UsageDriver>,
    counter: &dyn TokenCounting,
) -> ToonlensResult<ComparisonResult> {
    let encoded = encode_both(payload)?;

    let service = MeasurementService::new(driver, counter, config.model(), *config.pricing());
    let measured = service.measure(&encoded).await?;

    let result = ComparisonResult::new(
        config.model().as_str(),
        measured.json,
        measured.toon,
        measured.api_called,
    );

    info!(
        api_called = result.api_called(),
        token_savings = result.savings().tokens(),
        percentage = result.savings().percentage(),
        "Comparison complete"
    );
    Ok(result)
}
