use crate::identifiers::InstrumentIdValue;
use crate::properties::PerpetualProperty;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// The body of one entry in an instrument upsert.
///
/// Upserts are keyed by a caller-chosen correlation id; the platform echoes the
/// same key back in its response so the generated instrument id can be found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentDefinition {
    pub name: String,
    /// Identifier type (e.g. `"ClientInternal"`, `"Figi"`) to value.
    pub identifiers: BTreeMap<String, InstrumentIdValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PerpetualProperty>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<InstrumentEconomics>,
}

/// Economic definition of an OTC or exchange-traded instrument, tagged by the
/// platform's `instrumentType` discriminator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "instrumentType")]
pub enum InstrumentEconomics {
    #[serde(rename_all = "camelCase")]
    EquityOption {
        start_date: DateTime<Utc>,
        option_maturity_date: DateTime<Utc>,
        option_settlement_date: DateTime<Utc>,
        /// `"Cash"` or `"Physical"`.
        delivery_type: String,
        /// `"Call"` or `"Put"`.
        option_type: String,
        strike: Decimal,
        dom_ccy: String,
        /// Identifier type used to look up the underlying's quote.
        underlying_identifier: String,
        /// Identifier value of the underlying.
        code: String,
    },
    #[serde(rename_all = "camelCase")]
    Bond {
        start_date: DateTime<Utc>,
        maturity_date: DateTime<Utc>,
        dom_ccy: String,
        principal: Decimal,
        coupon_rate: Decimal,
        flow_conventions: FlowConventions,
    },
    #[serde(rename_all = "camelCase")]
    FxForward {
        start_date: DateTime<Utc>,
        maturity_date: DateTime<Utc>,
        dom_amount: Decimal,
        dom_ccy: String,
        fgn_amount: Decimal,
        fgn_ccy: String,
    },
    #[serde(rename_all = "camelCase")]
    SimpleInstrument {
        maturity_date: DateTime<Utc>,
        dom_ccy: String,
        asset_class: String,
        simple_instrument_type: String,
    },
}

/// Coupon schedule conventions for a bond.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowConventions {
    pub currency: String,
    /// Tenor string, e.g. `"6M"`.
    pub payment_frequency: String,
    pub day_count_convention: String,
    pub roll_convention: String,
    #[serde(deserialize_with = "whole_days")]
    pub settle_days: u32,
    #[serde(deserialize_with = "whole_days")]
    pub reset_days: u32,
}

// Buffered inside a tagged enum, a number only decodes back as a Decimal.
fn whole_days<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let days = <Decimal as Deserialize>::deserialize(deserializer)?;
    if !days.fract().is_zero() {
        return Err(serde::de::Error::custom(format!("{days} is not a whole number of days")));
    }
    days.to_u32()
        .ok_or_else(|| serde::de::Error::custom(format!("{days} is out of range for days")))
}

/// An instrument as returned by the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub lusid_instrument_id: String,
    pub name: String,
    #[serde(default)]
    pub identifiers: BTreeMap<String, String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub instrument_definition: Option<InstrumentEconomics>,
}

/// One entry of the platform's identifier-scheme listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierScheme {
    pub identifier_type: String,
    pub property_key: String,
    pub is_unique_identifier_type: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bond_definition_decodes_from_a_platform_response() {
        let body = r#"{
            "lusidInstrumentId": "LUID_GILT",
            "name": "Gilt",
            "instrumentDefinition": {
                "instrumentType": "Bond",
                "startDate": "2020-01-01T00:00:00Z",
                "maturityDate": "2025-01-01T00:00:00Z",
                "domCcy": "GBP",
                "principal": 100,
                "couponRate": 0.0412345678901234567,
                "flowConventions": {
                    "currency": "GBP",
                    "paymentFrequency": "6M",
                    "dayCountConvention": "Act365",
                    "rollConvention": "None",
                    "settleDays": 2,
                    "resetDays": 0
                }
            }
        }"#;
        let instrument: Instrument = serde_json::from_str(body).unwrap();

        match instrument.instrument_definition {
            Some(InstrumentEconomics::Bond {
                coupon_rate,
                flow_conventions,
                ..
            }) => {
                assert_eq!(coupon_rate.to_string(), "0.0412345678901234567");
                assert_eq!(flow_conventions.settle_days, 2);
                assert_eq!(flow_conventions.reset_days, 0);
            }
            other => panic!("unexpected definition: {other:?}"),
        }
    }

    #[test]
    fn fractional_settle_days_are_rejected() {
        let err = serde_json::from_value::<FlowConventions>(json!({
            "currency": "GBP",
            "paymentFrequency": "6M",
            "dayCountConvention": "Act365",
            "rollConvention": "None",
            "settleDays": 1.5,
            "resetDays": 0
        }))
        .unwrap_err();
        assert!(err.to_string().contains("not a whole number"));
    }
}
