use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyAmount {
    pub amount: Decimal,
    pub currency: String,
}

impl CurrencyAmount {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPrice {
    pub price: Decimal,
    /// `"Price"`, `"Yield"`, `"Spread"` and so on.
    #[serde(rename = "type")]
    pub price_type: String,
}

impl TransactionPrice {
    pub fn price(price: Decimal) -> Self {
        Self {
            price,
            price_type: "Price".to_string(),
        }
    }
}

/// A single transaction booked into a transaction portfolio.
///
/// The platform resolves the instrument from `instrument_identifiers`, keyed by
/// property key (`Instrument/default/ClientInternal`, `Instrument/default/Currency`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub transaction_id: String,
    /// Transaction type as configured on the platform (`"Buy"`, `"FundsIn"`, ...).
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub instrument_identifiers: BTreeMap<String, String>,
    pub transaction_date: DateTime<Utc>,
    pub settlement_date: DateTime<Utc>,
    pub units: Decimal,
    pub transaction_price: TransactionPrice,
    pub total_consideration: CurrencyAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}
