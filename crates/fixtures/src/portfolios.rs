use crate::dates::midnight;
use crate::transactions::instrument_identifiers;
use chrono::NaiveDate;
use core_types::{
    AdjustHoldingRequest, CreateTransactionPortfolioRequest, CurrencyAmount, ResourceId,
    TargetTaxLot,
};
use rust_decimal::Decimal;

/// A transaction portfolio, optionally subscribed to a corporate action source.
pub fn transaction_portfolio(
    code: &str,
    display_name: &str,
    base_currency: &str,
    created: NaiveDate,
    corporate_action_source: Option<&ResourceId>,
) -> CreateTransactionPortfolioRequest {
    CreateTransactionPortfolioRequest {
        display_name: display_name.to_string(),
        code: code.to_string(),
        base_currency: base_currency.to_string(),
        created: midnight(created),
        description: None,
        corporate_action_source_id: corporate_action_source.cloned(),
    }
}

/// Sets the holding in one instrument to a single tax lot of `units` bought
/// for `cost`.
pub fn holding_adjustment(
    client_internal: &str,
    units: Decimal,
    cost: Decimal,
    currency: &str,
) -> AdjustHoldingRequest {
    AdjustHoldingRequest {
        instrument_identifiers: instrument_identifiers(client_internal),
        tax_lots: vec![TargetTaxLot {
            units,
            cost: Some(CurrencyAmount::new(cost, currency)),
            price: None,
        }],
    }
}
