use crate::error::ConfigError;
use std::collections::HashMap;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{ApiConfig, Config, LoggingConfig, TutorialSettings};

/// Prefix of the environment variables that override file settings,
/// e.g. `PLATFORM_API__ACCESS_TOKEN` sets `api.access_token`.
pub const ENV_PREFIX: &str = "PLATFORM";

/// Loads the configuration from an optional `config.toml` in the working
/// directory, overridden by `PLATFORM_*` environment variables.
///
/// A `.env` file, if present, is loaded into the environment first.
pub fn load_config() -> Result<Config, ConfigError> {
    let _ = dotenvy::dotenv();
    build_config(Path::new("config.toml"), None)
}

/// Loads the configuration from an explicit file, still honouring environment overrides.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let _ = dotenvy::dotenv();
    build_config(path.as_ref(), None)
}

/// Layers the file and the environment. `env` replaces the process environment
/// when given.
fn build_config(path: &Path, env: Option<HashMap<String, String>>) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .source(env),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}

impl Config {
    /// Rejects settings that would only fail later, on the first remote call.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "api.base_url must not be empty".to_string(),
            ));
        }
        if self.api.request_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "api.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.tutorials.scope_prefix.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "tutorials.scope_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
