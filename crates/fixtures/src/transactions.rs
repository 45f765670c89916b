use crate::dates::{midnight, plus_days};
use chrono::NaiveDate;
use core_types::{CurrencyAmount, TransactionPrice, TransactionRequest, identifier_types};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Identifiers pointing a transaction at an instrument by client-internal code.
pub fn instrument_identifiers(client_internal: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(
        identifier_types::property_key(identifier_types::CLIENT_INTERNAL),
        client_internal.to_string(),
    )])
}

/// Identifiers pointing a transaction at a currency.
pub fn cash_identifiers(currency: &str) -> BTreeMap<String, String> {
    BTreeMap::from([(
        identifier_types::property_key(identifier_types::CURRENCY),
        currency.to_string(),
    )])
}

/// Cash paid into the portfolio, settling on the trade date.
pub fn funds_in(
    transaction_id: &str,
    currency: &str,
    amount: Decimal,
    trade_date: NaiveDate,
) -> TransactionRequest {
    TransactionRequest {
        transaction_id: transaction_id.to_string(),
        transaction_type: "FundsIn".to_string(),
        instrument_identifiers: cash_identifiers(currency),
        transaction_date: midnight(trade_date),
        settlement_date: midnight(trade_date),
        units: amount,
        transaction_price: TransactionPrice::price(Decimal::ONE),
        total_consideration: CurrencyAmount::new(amount, currency),
        source: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn trade(
    transaction_type: &str,
    transaction_id: &str,
    client_internal: &str,
    units: Decimal,
    price: Decimal,
    currency: &str,
    trade_date: NaiveDate,
    settle_days: u64,
) -> TransactionRequest {
    TransactionRequest {
        transaction_id: transaction_id.to_string(),
        transaction_type: transaction_type.to_string(),
        instrument_identifiers: instrument_identifiers(client_internal),
        transaction_date: midnight(trade_date),
        settlement_date: midnight(plus_days(trade_date, settle_days)),
        units,
        transaction_price: TransactionPrice::price(price),
        total_consideration: CurrencyAmount::new(units * price, currency),
        source: None,
    }
}

/// A purchase of `units` at `price`, settling `settle_days` after the trade date.
pub fn buy(
    transaction_id: &str,
    client_internal: &str,
    units: Decimal,
    price: Decimal,
    currency: &str,
    trade_date: NaiveDate,
    settle_days: u64,
) -> TransactionRequest {
    trade("Buy", transaction_id, client_internal, units, price, currency, trade_date, settle_days)
}

pub fn sell(
    transaction_id: &str,
    client_internal: &str,
    units: Decimal,
    price: Decimal,
    currency: &str,
    trade_date: NaiveDate,
    settle_days: u64,
) -> TransactionRequest {
    trade("Sell", transaction_id, client_internal, units, price, currency, trade_date, settle_days)
}
