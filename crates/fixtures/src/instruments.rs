use crate::dates::midnight;
use chrono::NaiveDate;
use core_types::instruments::FlowConventions;
use core_types::{
    InstrumentDefinition, InstrumentEconomics, InstrumentIdValue, PerpetualProperty,
    PropertyValue, identifier_types,
};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

/// A listed equity known by its client-internal code and, optionally, a FIGI.
pub fn equity(name: &str, client_internal: &str, figi: Option<&str>) -> InstrumentDefinition {
    let mut identifiers = BTreeMap::from([(
        identifier_types::CLIENT_INTERNAL.to_string(),
        InstrumentIdValue::new(client_internal),
    )]);
    if let Some(figi) = figi {
        identifiers.insert(identifier_types::FIGI.to_string(), InstrumentIdValue::new(figi));
    }

    InstrumentDefinition {
        name: name.to_string(),
        identifiers,
        properties: vec![],
        definition: None,
    }
}

/// Attaches a label property to an instrument definition.
pub fn with_label(
    mut definition: InstrumentDefinition,
    key: &str,
    label: &str,
) -> InstrumentDefinition {
    definition.properties.push(PerpetualProperty {
        key: key.to_string(),
        value: PropertyValue::label(label),
    });
    definition
}

/// A cash-settled European call on an equity identified by `underlying_client_internal`.
pub fn equity_call_option(
    underlying_client_internal: &str,
    strike: Decimal,
    dom_ccy: &str,
    start: NaiveDate,
    maturity: NaiveDate,
) -> InstrumentEconomics {
    InstrumentEconomics::EquityOption {
        start_date: midnight(start),
        option_maturity_date: midnight(maturity),
        option_settlement_date: midnight(maturity),
        delivery_type: "Cash".to_string(),
        option_type: "Call".to_string(),
        strike,
        dom_ccy: dom_ccy.to_string(),
        underlying_identifier: identifier_types::CLIENT_INTERNAL.to_string(),
        code: underlying_client_internal.to_string(),
    }
}

/// A fixed-coupon bond paying semi-annually on an ACT/365 basis.
pub fn fixed_bond(
    dom_ccy: &str,
    principal: Decimal,
    coupon_rate: Decimal,
    start: NaiveDate,
    maturity: NaiveDate,
) -> InstrumentEconomics {
    InstrumentEconomics::Bond {
        start_date: midnight(start),
        maturity_date: midnight(maturity),
        dom_ccy: dom_ccy.to_string(),
        principal,
        coupon_rate,
        flow_conventions: FlowConventions {
            currency: dom_ccy.to_string(),
            payment_frequency: "6M".to_string(),
            day_count_convention: "Act365".to_string(),
            roll_convention: "None".to_string(),
            settle_days: 2,
            reset_days: 0,
        },
    }
}

/// An FX forward exchanging `dom_amount` for `fgn_amount` at maturity.
/// The foreign amount is negative when it is paid away.
pub fn fx_forward(
    dom_amount: Decimal,
    dom_ccy: &str,
    fgn_amount: Decimal,
    fgn_ccy: &str,
    start: NaiveDate,
    maturity: NaiveDate,
) -> InstrumentEconomics {
    InstrumentEconomics::FxForward {
        start_date: midnight(start),
        maturity_date: midnight(maturity),
        dom_amount,
        dom_ccy: dom_ccy.to_string(),
        fgn_amount,
        fgn_ccy: fgn_ccy.to_string(),
    }
}

/// Wraps economics into a definition that can be upserted as a master instrument.
pub fn otc_instrument(
    name: &str,
    client_internal: &str,
    economics: InstrumentEconomics,
) -> InstrumentDefinition {
    InstrumentDefinition {
        name: name.to_string(),
        identifiers: BTreeMap::from([(
            identifier_types::CLIENT_INTERNAL.to_string(),
            InstrumentIdValue::new(client_internal),
        )]),
        properties: vec![],
        definition: Some(economics),
    }
}

/// Keys definitions by their client-internal code, which doubles as the
/// correlation id of the upsert.
pub fn keyed_by_client_internal(
    definitions: Vec<InstrumentDefinition>,
) -> HashMap<String, InstrumentDefinition> {
    definitions
        .into_iter()
        .map(|definition| {
            let key = definition
                .identifiers
                .get(identifier_types::CLIENT_INTERNAL)
                .map(|id| id.value.clone())
                .unwrap_or_else(|| definition.name.clone());
            (key, definition)
        })
        .collect()
}

/// A demo equity: name, client-internal code, FIGI.
pub struct DemoEquity {
    pub name: &'static str,
    pub client_internal: &'static str,
    pub figi: &'static str,
}

/// The equities the portfolio tutorials book trades in.
pub const DEMO_EQUITIES: &[DemoEquity] = &[
    DemoEquity {
        name: "Tutorial Oil Plc",
        client_internal: "TUT-OIL",
        figi: "BBG00TUT0001",
    },
    DemoEquity {
        name: "Tutorial Telecom Plc",
        client_internal: "TUT-TEL",
        figi: "BBG00TUT0002",
    },
    DemoEquity {
        name: "Tutorial Bank Plc",
        client_internal: "TUT-BNK",
        figi: "BBG00TUT0003",
    },
];

/// Definitions for every entry of [`DEMO_EQUITIES`], codes suffixed so a
/// test run owns its own copies.
pub fn demo_equities(suffix: &str) -> Vec<InstrumentDefinition> {
    DEMO_EQUITIES
        .iter()
        .map(|e| {
            equity(
                e.name,
                &format!("{}-{}", e.client_internal, suffix),
                Some(&format!("{}{}", e.figi, suffix)),
            )
        })
        .collect()
}
