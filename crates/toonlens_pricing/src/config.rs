//! TOML-backed pricing table.
//!
//! The configuration system supports:
//! - Bundled defaults (include_str! from toonlens.toml)
//! - User overrides (./toonlens.toml or ~/.config/toonlens/toonlens.toml)
//! - Automatic merging with user values taking precedence

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use toonlens_core::ModelPricing;
use toonlens_error::{ConfigError, ToonlensError, ToonlensResult};
use tracing::{debug, instrument};

/// Model whose pricing applies when nothing else is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o";

const BUNDLED_CONFIG: &str = include_str!("../../../toonlens.toml");

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

/// Per-model pricing table.
///
/// # Example
///
/// ```toml
/// default_model = "gpt-4o"
///
/// [models."gpt-4o"]
/// input_per_1k = 0.0025
/// output_per_1k = 0.01
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PricingConfig {
    /// Model whose pricing is used for unlisted models
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Map of model name to pricing
    #[serde(default)]
    pub models: BTreeMap<String, ModelPricing>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_model: default_model(),
            models: BTreeMap::from([(default_model(), ModelPricing::default())]),
        }
    }
}

impl PricingConfig {
    /// The pricing table shipped with the crate, without user overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled table fails validation.
    pub fn bundled() -> ToonlensResult<Self> {
        Self::build(Config::builder().add_source(File::from_str(BUNDLED_CONFIG, FileFormat::Toml)))
    }

    /// Load a pricing table from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> ToonlensResult<Self> {
        debug!("Loading pricing from file");

        let config = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ToonlensError::from(ConfigError::new(format!(
                    "Failed to read pricing from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?;
        Self::deserialize_validated(config)
    }

    /// Load pricing with precedence: user override > bundled default.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (toonlens.toml shipped with the library)
    /// 2. User config in home directory (~/.config/toonlens/toonlens.toml)
    /// 3. User config in current directory (./toonlens.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use toonlens_pricing::PricingConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let pricing = PricingConfig::load()?;
    /// println!("{:?}", pricing.pricing_for("gpt-4o"));
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> ToonlensResult<Self> {
        debug!("Loading pricing with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(BUNDLED_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/toonlens/toonlens.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("toonlens").required(false));

        Self::build(builder)
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> ToonlensResult<Self> {
        let config = builder.build().map_err(|e| {
            ToonlensError::from(ConfigError::new(format!(
                "Failed to build pricing configuration: {}",
                e
            )))
        })?;
        Self::deserialize_validated(config)
    }

    fn deserialize_validated(config: Config) -> ToonlensResult<Self> {
        let pricing: Self = config.try_deserialize().map_err(|e| {
            ToonlensError::from(ConfigError::new(format!(
                "Failed to parse pricing configuration: {}",
                e
            )))
        })?;
        pricing.validate()?;
        Ok(pricing)
    }

    /// Checks every rate and that the default model has an entry.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the offending model.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (model, pricing) in &self.models {
            pricing
                .validate()
                .map_err(|e| ConfigError::new(format!("Invalid pricing for {}: {}", model, e)))?;
        }
        if !self.models.contains_key(&self.default_model) {
            return Err(ConfigError::new(format!(
                "Default model {} has no pricing entry",
                self.default_model
            )));
        }
        Ok(())
    }

    /// Pricing entry for exactly `model`, if configured.
    pub fn get(&self, model: &str) -> Option<&ModelPricing> {
        self.models.get(model)
    }

    /// Pricing for `model`, falling back to the default model's pricing.
    #[instrument(skip(self))]
    pub fn pricing_for(&self, model: &str) -> ModelPricing {
        if let Some(pricing) = self.get(model) {
            return *pricing;
        }
        debug!(
            default_model = %self.default_model,
            "No pricing for model, using default"
        );
        self.get(&self.default_model).copied().unwrap_or_default()
    }
}
