use crate::enums::QuoteType;
use serde::{Deserialize, Serialize};

/// A recipe: which market data to use and which model to price with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationRecipe {
    pub scope: String,
    pub code: String,
    pub market: MarketContext,
    pub pricing: PricingContext,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketContext {
    #[serde(default)]
    pub market_rules: Vec<MarketDataKeyRule>,
    /// Checked before `market_rules`; a specific rule only applies to
    /// instruments matching its dependency filter.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub specific_rules: Vec<MarketDataSpecificRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<MarketOptions>,
}

/// Maps market-data keys (e.g. `"Quote.ClientInternal.*"`) to a supplier,
/// scope and quote field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDataKeyRule {
    pub key: String,
    pub supplier: String,
    pub data_scope: String,
    pub quote_type: QuoteType,
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDataSpecificRule {
    pub key: String,
    pub supplier: String,
    pub data_scope: String,
    pub quote_type: QuoteType,
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_source: Option<String>,
    pub dependency_source_filter: DependencySourceFilter,
}

/// Restricts a specific rule to the dependencies of matching instruments.
/// Unset fields match anything.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencySourceFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dom_ccy: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOptions {
    pub default_supplier: String,
    pub default_instrument_code_type: String,
    pub default_scope: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingContext {
    #[serde(default)]
    pub model_rules: Vec<VendorModelRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<PricingOptions>,
}

/// Chooses a pricing model for one instrument type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorModelRule {
    pub supplier: String,
    pub model_name: String,
    pub instrument_type: String,
    #[serde(default)]
    pub parameters: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingOptions {
    pub model_selection: ModelSelection,
    #[serde(default)]
    pub use_instrument_type_to_determine_pricer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSelection {
    pub library: String,
    pub model: String,
}
