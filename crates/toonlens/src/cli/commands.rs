//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use toonlens::{DEFAULT_MODEL, DEFAULT_NUM_USERS, Format};

/// Toonlens - compare JSON and TOON token counts and costs
#[derive(Parser, Debug)]
#[command(name = "toonlens")]
#[command(about = "Compare JSON and TOON token counts and costs for LLM payloads", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[cfg(feature = "observability")]
    #[arg(long, global = true)]
    pub json_logs: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a payload and compare its JSON and TOON costs
    Compare {
        /// Number of users in the payload (1-50)
        #[arg(short, long, default_value_t = DEFAULT_NUM_USERS)]
        users: usize,

        /// Model to measure against
        #[arg(short, long, default_value = DEFAULT_MODEL)]
        model: String,

        /// Never call the API, even if OPENAI_API_KEY is set
        #[arg(long)]
        offline: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Include payload previews in the report
        #[arg(long)]
        show_content: bool,

        /// Pricing table to use instead of the layered defaults
        #[arg(long)]
        pricing_file: Option<PathBuf>,
    },

    /// Print one encoding of a freshly generated payload
    Encode {
        /// Number of users in the payload (1-50)
        #[arg(short, long, default_value_t = DEFAULT_NUM_USERS)]
        users: usize,

        /// Encoding to print
        #[arg(long, value_enum, default_value = "toon")]
        format: EncodingFormat,

        /// Seed for reproducible payload values
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the loaded pricing table
    Pricing {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Pricing table to use instead of the layered defaults
        #[arg(long)]
        pricing_file: Option<PathBuf>,
    },
}

impl Commands {
    /// Whether stdout carries machine-readable output for this command.
    #[cfg_attr(not(feature = "observability"), allow(dead_code))]
    pub fn prints_data(&self) -> bool {
        match self {
            Commands::Compare { format, .. } | Commands::Pricing { format, .. } => {
                *format == OutputFormat::Json
            }
            Commands::Encode { .. } => true,
        }
    }
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Payload encoding selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EncodingFormat {
    /// Baseline JSON
    Json,
    /// TOON
    Toon,
}

impl From<EncodingFormat> for Format {
    fn from(format: EncodingFormat) -> Self {
        match format {
            EncodingFormat::Json => Format::Json,
            EncodingFormat::Toon => Format::Toon,
        }
    }
}
