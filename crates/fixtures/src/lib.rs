//! # Fixtures
//!
//! Pure builders for the requests the tutorials send to the platform.
//!
//! Every function here is a deterministic mapping from its literal arguments
//! to a request record: calling it twice with the same inputs yields two equal
//! values. The only exception is the [`ids`] module, which exists to mint
//! unique scopes and codes so tests can run in parallel without colliding.
//!
//! Dates are taken as `NaiveDate` and pinned to midnight UTC, which is how the
//! platform treats date-only effective times.

pub mod corporate_actions;
pub mod dates;
pub mod ids;
pub mod instruments;
pub mod market_data;
pub mod portfolios;
pub mod properties;
pub mod quotes;
pub mod recipes;
pub mod transactions;
pub mod valuation;

pub use corporate_actions::CorporateActionDates;
pub use dates::midnight;
