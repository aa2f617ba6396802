//! Toonlens CLI binary.
//!
//! This binary provides command-line access to toonlens:
//! - Compare JSON and TOON token counts and costs
//! - Print either encoding of a generated payload
//! - Show the loaded pricing table

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_compare, handle_encode, handle_pricing};

    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr, and span export to stdout is
    // skipped when stdout carries the command's data
    #[cfg(feature = "observability")]
    let _guard = {
        use toonlens::observability::{ObservabilityConfig, init_observability_with_config};

        let mut config = ObservabilityConfig::default()
            .with_json_logs(cli.json_logs)
            .with_span_export(!cli.command.prints_data());
        if cli.verbose {
            config = config.with_log_level("debug");
        }
        init_observability_with_config(config)?
    };

    #[cfg(not(feature = "observability"))]
    {
        let log_level = if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    // Execute the requested command
    match cli.command {
        Commands::Compare {
            users,
            model,
            offline,
            format,
            show_content,
            pricing_file,
        } => {
            handle_compare(
                users,
                &model,
                offline,
                format,
                show_content,
                pricing_file.as_deref(),
            )
            .await?;
        }

        Commands::Encode {
            users,
            format,
            seed,
        } => {
            handle_encode(users, format, seed)?;
        }

        Commands::Pricing {
            format,
            pricing_file,
        } => {
            handle_pricing(format, pricing_file.as_deref())?;
        }
    }

    Ok(())
}
