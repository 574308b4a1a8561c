//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `DIVORCE_TEMPLATES`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use divorce_templates::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Templates prefixed with {}", config.templates.prefix);
//! ```

mod contact;
mod error;
mod logging;
mod templates;
mod timings;

pub use contact::ContactConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use templates::{OutputConfig, TemplatesConfig};
pub use timings::TimingsConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Statutory periods used for derived dates
    #[serde(default)]
    pub timings: TimingsConfig,

    /// Service centre contact details and sign-in URLs
    #[serde(default)]
    pub contact: ContactConfig,

    /// Template naming
    #[serde(default)]
    pub templates: TemplatesConfig,

    /// File renderer output location
    #[serde(default)]
    pub output: OutputConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads variables with the
    /// `DIVORCE_TEMPLATES` prefix.
    ///
    /// # Environment Variable Format
    ///
    /// - `DIVORCE_TEMPLATES__TIMINGS__HOLDING_PERIOD_DAYS=141` -> `timings.holding_period_days`
    /// - `DIVORCE_TEMPLATES__TEMPLATES__PREFIX=FL-NFD` -> `templates.prefix`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DIVORCE_TEMPLATES")
                    .separator("__"),
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
        self.timings.validate()?;
        self.contact.validate()?;
        self.templates.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
