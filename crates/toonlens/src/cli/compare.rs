//! `toonlens compare` handler.

use super::commands::OutputFormat;
use super::pricing::load_pricing;
use std::path::Path;
use toonlens::{ComparisonConfig, JsonError, ToonlensResult, render_report, run_comparison};
use tracing::{info, instrument};

/// Run a comparison and print the report.
#[instrument(skip_all, fields(users = users, model = %model, offline = offline))]
pub async fn handle_compare(
    users: usize,
    model: &str,
    offline: bool,
    format: OutputFormat,
    show_content: bool,
    pricing_file: Option<&Path>,
) -> ToonlensResult<()> {
    let pricing = load_pricing(pricing_file)?;

    let mut builder = ComparisonConfig::builder();
    if !offline {
        builder.with_env();
    }
    builder
        .model(model)
        .num_users(users)
        .pricing(pricing.pricing_for(model));
    let config = builder.build()?;

    if !config.has_credential() {
        info!("No API key configured, token counts will be estimated locally");
    }

    let result = run_comparison(&config).await?;

    match format {
        OutputFormat::Human => print!("{}", render_report(&result, show_content)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
    }

    Ok(())
}
