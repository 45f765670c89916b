use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Key of a complex market data item such as a discount curve or a
/// volatility surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexMarketDataId {
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lineage: Option<String>,
    pub effective_at: DateTime<Utc>,
    /// Asset string the recipe resolves against, e.g. `"USD/USDOIS"` or `"EUR/USD/LN"`.
    pub market_asset: String,
}

/// Complex market data body, tagged by the platform's `marketDataType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "marketDataType")]
pub enum ComplexMarketData {
    #[serde(rename_all = "camelCase")]
    DiscountFactorCurveData {
        base_date: DateTime<Utc>,
        dates: Vec<DateTime<Utc>>,
        discount_factors: Vec<Decimal>,
    },
    /// Raw document the platform parses server-side (e.g. an XML or CSV surface).
    #[serde(rename_all = "camelCase")]
    OpaqueMarketData {
        document: String,
        format: String,
        name: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertComplexMarketDataRequest {
    pub market_data_id: ComplexMarketDataId,
    pub market_data: ComplexMarketData,
}
