//! # Platform Tutorials
//!
//! Worked examples of the portfolio platform's API, written as integration
//! tests under `tests/`.
//!
//! This crate only wires the workspace together. [`TestContext`] loads the
//! settings, installs logging, builds the platform client and mints a scope
//! unique to the calling test, so tests can run in parallel without sharing
//! any remote state.

use anyhow::Context;
use api_client::{HttpPlatformClient, PlatformClient};
use configuration::{ApiConfig, Config, LoggingConfig, TutorialSettings};
use std::sync::Arc;
use tracing_appender::non_blocking::WorkerGuard;

pub use api_client;
pub use core_types;
pub use fixtures;
pub use scenarios;

/// Everything one tutorial needs to talk to the platform.
pub struct TestContext {
    pub config: Config,
    pub client: Arc<dyn PlatformClient>,
    /// A scope no other test uses, prefixed with `tutorials.scope_prefix`.
    pub scope: String,
    /// Unique scope for the quotes only a currency-specific recipe rule resolves to.
    pub override_scope: String,
    _log_guard: Option<WorkerGuard>,
}

impl TestContext {
    /// Builds a context from `config.toml` and `PLATFORM_*` environment variables.
    pub fn load() -> anyhow::Result<Self> {
        let config = configuration::load_config().context("loading tutorial settings")?;
        Self::from_config(config)
    }

    /// Builds a context against `base_url` with default settings, for
    /// running the tutorials against a local stand-in.
    pub fn for_base_url(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let config = Config {
            api: ApiConfig::new(base_url),
            tutorials: TutorialSettings::default(),
            logging: LoggingConfig::default(),
        };
        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        config.validate().context("validating tutorial settings")?;
        let log_guard =
            configuration::init_tracing(&config.logging).context("initialising logging")?;

        let client = HttpPlatformClient::new(&config.api).context("building the platform client")?;
        let scope = fixtures::ids::unique_scope(&config.tutorials.scope_prefix);
        let override_scope = fixtures::ids::unique_scope(&config.tutorials.override_scope);
        tracing::info!(base_url = client.base_url(), %scope, "Tutorial context ready.");

        Ok(Self {
            config,
            client: Arc::new(client),
            scope,
            override_scope,
            _log_guard: log_guard,
        })
    }

    /// The client as a trait object, as the scenario drivers take it.
    pub fn client(&self) -> &dyn PlatformClient {
        self.client.as_ref()
    }

    /// Currency the demo portfolios are booked in.
    pub fn currency(&self) -> &str {
        &self.config.tutorials.default_currency
    }

    /// A code unique to this context, e.g. for a portfolio or recipe.
    pub fn unique_code(&self, prefix: &str) -> String {
        fixtures::ids::unique_code(prefix)
    }
}
