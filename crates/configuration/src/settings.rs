use serde::Deserialize;

/// The root configuration structure for the tutorial suite.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub tutorials: TutorialSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Connection settings for the remote platform.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Root of the platform's REST API, e.g. `"https://example.platform.com/api"`.
    pub base_url: String,
    /// Bearer token attached to every request. Obtaining it is out of scope here.
    #[serde(default)]
    pub access_token: String,
    /// Sent as the application name header so requests can be traced server-side.
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    /// Settings for an unauthenticated client against `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: String::new(),
            app_name: default_app_name(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

/// Knobs shared by the tutorial scenarios.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TutorialSettings {
    /// Prepended to every generated scope so tutorial data is easy to find and purge.
    pub scope_prefix: String,
    /// Scope holding the quotes a specific market-data rule points at.
    pub override_scope: String,
    pub default_currency: String,
}

impl Default for TutorialSettings {
    fn default() -> Self {
        Self {
            scope_prefix: "tutorials".to_string(),
            override_scope: "tutorials-override".to_string(),
            default_currency: "GBP".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence when set.
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "tutorials.log".to_string(),
        }
    }
}

fn default_app_name() -> String {
    "platform-tutorials".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}
