//! # Scenarios
//!
//! Sequential orchestration of the tutorial scenarios against a
//! [`PlatformClient`].
//!
//! Each scenario is a fixed list of remote calls. Identifiers flow from one
//! response into the next request, and the first failing call aborts the
//! sequence with the platform's error unchanged. Nothing is retried.
//!
//! Resources are registered with a [`Cleanup`] as soon as they exist, so a
//! test can tear down whatever was created even when a later step fails.
//!
//! ## Public API
//!
//! - [`DemoPortfolio`]: cash plus one equity, optionally subscribed to a
//!   corporate action source.
//! - [`instruments`]: batches of master instruments, equities and OTC alike.
//! - [`corporate_actions`]: dividends, splits and name changes, observed
//!   through holdings snapshots.
//! - [`market_data`]: quote and complex market data round trips.
//! - [`valuation`]: inline and portfolio valuations against recipes.
//! - [`assertions`]: holdings lookups used when checking results.

pub mod assertions;
pub mod corporate_actions;
pub mod error;
pub mod instruments;
pub mod market_data;
pub mod setup;
pub mod teardown;
pub mod valuation;

pub use error::ScenarioError;
pub use setup::{DemoPortfolio, DemoPortfolioSpec};
pub use teardown::{Cleanup, CleanupReport, Resource};

use api_client::ErrorDetail;
use std::collections::BTreeMap;

/// Fails with [`ScenarioError::PartialFailure`] if a batch call rejected any item.
pub(crate) fn check_failed(
    operation: &'static str,
    failed: &BTreeMap<String, ErrorDetail>,
) -> Result<(), ScenarioError> {
    if failed.is_empty() {
        return Ok(());
    }
    for (key, detail) in failed {
        tracing::error!(
            operation,
            key = %key,
            detail = ?detail.detail,
            "Item rejected by the platform."
        );
    }
    Err(ScenarioError::PartialFailure {
        operation,
        failed: failed.keys().cloned().collect(),
    })
}
