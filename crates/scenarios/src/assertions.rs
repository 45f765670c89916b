//! Lookups over holdings returned by the platform.

use core_types::{HoldingType, PortfolioHolding};
use rust_decimal::Decimal;

fn cash_of_type<'a>(
    holdings: &'a [PortfolioHolding],
    holding_type: HoldingType,
    currency: &str,
) -> Option<&'a PortfolioHolding> {
    holdings
        .iter()
        .find(|h| h.holding_type == holding_type && h.cash_currency() == Some(currency))
}

/// The settled cash balance in `currency`.
pub fn cash_balance<'a>(
    holdings: &'a [PortfolioHolding],
    currency: &str,
) -> Option<&'a PortfolioHolding> {
    cash_of_type(holdings, HoldingType::CashBalance, currency)
}

/// Cash accrued in `currency` but not yet paid.
pub fn accrual<'a>(
    holdings: &'a [PortfolioHolding],
    currency: &str,
) -> Option<&'a PortfolioHolding> {
    cash_of_type(holdings, HoldingType::CashAccrual, currency)
}

/// The position in the instrument with platform id `instrument_uid`.
pub fn position_for<'a>(
    holdings: &'a [PortfolioHolding],
    instrument_uid: &str,
) -> Option<&'a PortfolioHolding> {
    holdings
        .iter()
        .find(|h| h.holding_type == HoldingType::Position && h.instrument_uid == instrument_uid)
}

/// Units held in an instrument, zero when there is no position.
pub fn units_of(holdings: &[PortfolioHolding], instrument_uid: &str) -> Decimal {
    position_for(holdings, instrument_uid).map_or(Decimal::ZERO, |h| h.units)
}
