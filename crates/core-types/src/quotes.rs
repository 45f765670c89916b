use crate::enums::QuoteType;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A number with its unit, e.g. `199.23 USD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricValue {
    pub value: Decimal,
    pub unit: String,
}

impl MetricValue {
    pub fn new(value: Decimal, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// Identifies a time series of quotes.
///
/// Every field participates in the key: two quotes that differ only in
/// `field` (e.g. `"mid"` vs `"bid"`) live in different series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteSeriesId {
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_source: Option<String>,
    pub instrument_id: String,
    pub instrument_id_type: String,
    pub quote_type: QuoteType,
    pub field: String,
}

/// A quote series id pinned to an effective time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteId {
    pub quote_series_id: QuoteSeriesId,
    pub effective_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertQuoteRequest {
    pub quote_id: QuoteId,
    pub metric_value: MetricValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineage: Option<String>,
}

/// A stored quote as returned by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub quote_id: QuoteId,
    pub metric_value: MetricValue,
    #[serde(default)]
    pub lineage: Option<String>,
    #[serde(default)]
    pub as_at: Option<DateTime<Utc>>,
}
