//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CHAT_MULTISELECT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use chat_multiselect::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Default cap: {}", config.form.default_total_max_select);
//! ```

mod error;
mod form;
mod logging;
mod transport;

pub use error::{ConfigError, ValidationError};
pub use form::FormConfig;
pub use logging::LoggingConfig;
pub use transport::{TransportConfig, TransportKind};

use serde::Deserialize;

/// Root application configuration
///
/// Every section is defaulted, so an empty environment is a valid
/// stdout-only setup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Form rendering defaults
    #[serde(default)]
    pub form: FormConfig,

    /// Chat transport (stdout or dialog runtime)
    #[serde(default)]
    pub transport: TransportConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CHAT_MULTISELECT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CHAT_MULTISELECT__FORM__DEFAULT_TOTAL_MAX_SELECT=4` -> `form.default_total_max_select = 4`
    /// - `CHAT_MULTISELECT__TRANSPORT__KIND=http` -> `transport.kind = Http`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHAT_MULTISELECT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.form.validate()?;
        self.transport.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
