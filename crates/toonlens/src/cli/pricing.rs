//! `toonlens pricing` handler.

use super::commands::OutputFormat;
use std::path::Path;
use toonlens::{JsonError, PricingConfig, ToonlensResult};

/// Load the pricing table from `path`, or the layered defaults.
pub fn load_pricing(path: Option<&Path>) -> ToonlensResult<PricingConfig> {
    match path {
        Some(path) => PricingConfig::from_file(path),
        None => PricingConfig::load(),
    }
}

/// Print the pricing table.
pub fn handle_pricing(format: OutputFormat, pricing_file: Option<&Path>) -> ToonlensResult<()> {
    let pricing = load_pricing(pricing_file)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&pricing)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            println!("{:<20} {:>14} {:>14}", "MODEL", "INPUT / 1K", "OUTPUT / 1K");
            println!("{:-<50}", "");
            for (model, rates) in &pricing.models {
                let marker = if *model == pricing.default_model {
                    " (default)"
                } else {
                    ""
                };
                println!(
                    "{:<20} {:>14} {:>14}{}",
                    model,
                    format!("${:.5}", rates.input_per_1k()),
                    format!("${:.5}", rates.output_per_1k()),
                    marker
                );
            }
        }
    }

    Ok(())
}
