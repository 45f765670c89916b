use crate::dates::midnight;
use crate::transactions::{cash_identifiers, instrument_identifiers};
use chrono::NaiveDate;
use core_types::{
    CorporateActionTransition, CorporateActionTransitionComponent,
    CreateCorporateActionSourceRequest, UpsertCorporateActionRequest,
};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// The four dates every corporate action carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorporateActionDates {
    pub announcement: NaiveDate,
    pub ex: NaiveDate,
    pub record: NaiveDate,
    pub payment: NaiveDate,
}

pub fn source(scope: &str, code: &str, display_name: &str) -> CreateCorporateActionSourceRequest {
    CreateCorporateActionSourceRequest {
        scope: scope.to_string(),
        code: code.to_string(),
        display_name: display_name.to_string(),
        description: None,
    }
}

fn component(
    instrument_identifiers: BTreeMap<String, String>,
    units_factor: Decimal,
    cost_factor: Decimal,
) -> CorporateActionTransitionComponent {
    CorporateActionTransitionComponent {
        instrument_identifiers,
        units_factor,
        cost_factor,
    }
}

fn action(
    code: &str,
    description: &str,
    dates: CorporateActionDates,
    transition: CorporateActionTransition,
) -> UpsertCorporateActionRequest {
    UpsertCorporateActionRequest {
        corporate_action_code: code.to_string(),
        description: Some(description.to_string()),
        announcement_date: midnight(dates.announcement),
        ex_date: midnight(dates.ex),
        record_date: midnight(dates.record),
        payment_date: midnight(dates.payment),
        transitions: vec![transition],
    }
}

/// A cash dividend of `rate` per unit.
///
/// The equity holding is carried over unchanged and each unit additionally
/// yields `rate` units of cash at zero cost.
pub fn cash_dividend(
    code: &str,
    client_internal: &str,
    currency: &str,
    rate: Decimal,
    dates: CorporateActionDates,
) -> UpsertCorporateActionRequest {
    let transition = CorporateActionTransition {
        input_transition: component(
            instrument_identifiers(client_internal),
            Decimal::ONE,
            Decimal::ONE,
        ),
        output_transitions: vec![
            component(instrument_identifiers(client_internal), Decimal::ONE, Decimal::ONE),
            component(cash_identifiers(currency), rate, Decimal::ZERO),
        ],
    };
    action(code, "Cash dividend", dates, transition)
}

/// A stock split: each unit becomes `ratio` units carrying the same total cost.
pub fn stock_split(
    code: &str,
    client_internal: &str,
    ratio: Decimal,
    dates: CorporateActionDates,
) -> UpsertCorporateActionRequest {
    let transition = CorporateActionTransition {
        input_transition: component(
            instrument_identifiers(client_internal),
            Decimal::ONE,
            Decimal::ONE,
        ),
        output_transitions: vec![component(
            instrument_identifiers(client_internal),
            ratio,
            Decimal::ONE,
        )],
    };
    action(code, "Stock split", dates, transition)
}

/// Moves the whole holding from one instrument to another, one for one.
pub fn name_change(
    code: &str,
    old_client_internal: &str,
    new_client_internal: &str,
    dates: CorporateActionDates,
) -> UpsertCorporateActionRequest {
    let transition = CorporateActionTransition {
        input_transition: component(
            instrument_identifiers(old_client_internal),
            Decimal::ONE,
            Decimal::ONE,
        ),
        output_transitions: vec![component(
            instrument_identifiers(new_client_internal),
            Decimal::ONE,
            Decimal::ONE,
        )],
    };
    action(code, "Name change", dates, transition)
}
