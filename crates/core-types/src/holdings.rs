use crate::enums::HoldingType;
use crate::transactions::CurrencyAmount;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A holding computed by the platform as of an effective date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioHolding {
    /// Platform instrument id; cash holdings use `CCY_<ISO>`.
    pub instrument_uid: String,
    pub holding_type: HoldingType,
    pub units: Decimal,
    pub settled_units: Decimal,
    pub cost: CurrencyAmount,
    #[serde(default)]
    pub cost_portfolio_ccy: Option<CurrencyAmount>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl PortfolioHolding {
    /// The currency a cash holding is denominated in, if this is a cash holding.
    pub fn cash_currency(&self) -> Option<&str> {
        self.instrument_uid.strip_prefix("CCY_")
    }
}

/// A tax lot used when setting or adjusting holdings directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetTaxLot {
    pub units: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<CurrencyAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

/// Sets the holding in one instrument to the given tax lots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustHoldingRequest {
    pub instrument_identifiers: BTreeMap<String, String>,
    pub tax_lots: Vec<TargetTaxLot>,
}

/// One projected cash flow of a portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlow {
    pub payment_date: DateTime<Utc>,
    pub amount: Decimal,
    pub currency: String,
    #[serde(default)]
    pub instrument_uid: Option<String>,
    #[serde(default)]
    pub cash_flow_type: Option<String>,
}
