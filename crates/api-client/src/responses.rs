use chrono::{DateTime, Utc};
use core_types::{
    CorporateAction, Instrument, Quote, ValuationRow, market_data::ComplexMarketDataId,
};
use serde::Deserialize;
use std::collections::BTreeMap;

// Platform bodies are camelCase; `rename_all` maps them onto snake_case fields.

/// Why one item of a batch request failed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// A plain list of resources.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceListOf<T> {
    pub values: Vec<T>,
}

/// The response to a keyed batch upsert: successes and failures by the
/// caller's correlation id.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertResponse<T> {
    #[serde(default = "BTreeMap::new")]
    pub values: BTreeMap<String, T>,
    #[serde(default = "BTreeMap::new")]
    pub failed: BTreeMap<String, ErrorDetail>,
}

pub type UpsertInstrumentsResponse = UpsertResponse<Instrument>;
pub type UpsertQuotesResponse = UpsertResponse<Quote>;
pub type UpsertComplexMarketDataResponse = UpsertResponse<ComplexMarketDataId>;

/// The response to a keyed quote lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetQuotesResponse {
    #[serde(default)]
    pub values: BTreeMap<String, Quote>,
    #[serde(default)]
    pub not_found: BTreeMap<String, ErrorDetail>,
    #[serde(default)]
    pub failed: BTreeMap<String, ErrorDetail>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertCorporateActionsResponse {
    #[serde(default)]
    pub values: Vec<CorporateAction>,
    #[serde(default)]
    pub failed: BTreeMap<String, ErrorDetail>,
}

/// Version stamp returned by writes to a portfolio.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub effective_from: DateTime<Utc>,
    pub as_at_date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VersionedResponse {
    pub version: Version,
}

/// The response to a recipe upsert: the as-at time of the write.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertRecipeResponse {
    pub value: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListAggregationResponse {
    #[serde(default)]
    pub data: Vec<ValuationRow>,
}

/// Represents an error response from the platform.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    pub name: String,
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub instance: Option<String>,
}
