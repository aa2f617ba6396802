//! Comparison run configuration.

use toonlens_core::ModelPricing;
use toonlens_error::ConfigError;
use toonlens_models::OPENAI_API_URL;

/// Fewest users a run may generate.
pub const MIN_USERS: usize = 1;

/// Most users a run may generate.
pub const MAX_USERS: usize = 50;

/// Users generated when none is configured.
pub const DEFAULT_NUM_USERS: usize = 5;

/// Model measured against when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";

/// Everything one comparison run needs.
///
/// A credential selects remote measurement; without one the run counts
/// tokens locally.
///
/// # Examples
///
/// ```
/// use toonlens_compare::ComparisonConfig;
///
/// let config = ComparisonConfig::builder().num_users(3usize).build().unwrap();
/// assert_eq!(config.model(), "gpt-4o");
/// assert!(!config.has_credential());
///
/// assert!(ComparisonConfig::builder().num_users(0usize).build().is_err());
/// ```
#[derive(Clone, PartialEq, derive_builder::Builder, derive_getters::Getters)]
#[builder(setter(into), build_fn(private, name = "build_internal"))]
pub struct ComparisonConfig {
    /// Model identifier sent to the API and used to pick a tokenizer
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Number of synthetic users to generate
    #[builder(default = "DEFAULT_NUM_USERS")]
    num_users: usize,
    /// API credential; `None` means local estimation only
    #[builder(default, setter(into, strip_option))]
    api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API
    #[builder(default = "OPENAI_API_URL.to_string()")]
    base_url: String,
    /// Rates used to price both measurements
    #[builder(default)]
    pricing: ModelPricing,
}

impl std::fmt::Debug for ComparisonConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparisonConfig")
            .field("model", &self.model)
            .field("num_users", &self.num_users)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("pricing", &self.pricing)
            .finish()
    }
}

impl ComparisonConfig {
    /// Creates a new builder for `ComparisonConfig`.
    pub fn builder() -> ComparisonConfigBuilder {
        ComparisonConfigBuilder::default()
    }

    /// Defaults plus credential and base URL from the environment.
    ///
    /// Callers that want `.env` support load it first with `dotenvy`.
    ///
    /// # Errors
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::builder().with_env().build()
    }

    /// Whether a credential is present, which selects remote measurement.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Checks the user count bounds and model name.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_USERS..=MAX_USERS).contains(&self.num_users) {
            return Err(ConfigError::new(format!(
                "num_users must be between {} and {}, got {}",
                MIN_USERS, MAX_USERS, self.num_users
            )));
        }
        if self.model.trim().is_empty() {
            return Err(ConfigError::new("model must not be empty"));
        }
        if self.api_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
            return Err(ConfigError::new("api_key must not be blank when set"));
        }
        self.pricing
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid pricing: {}", e)))
    }
}

impl ComparisonConfigBuilder {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn build(&self) -> Result<ComparisonConfig, ConfigError> {
        let config = self
            .build_internal()
            .map_err(|e| ConfigError::new(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads the credential and base URL from the environment.
    ///
    /// Unset and empty variables leave the builder untouched.
    pub fn with_env(&mut self) -> &mut Self {
        if let Some(key) = read_env(API_KEY_ENV) {
            self.api_key(key);
        }
        if let Some(url) = read_env(BASE_URL_ENV) {
            self.base_url(url);
        }
        self
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
