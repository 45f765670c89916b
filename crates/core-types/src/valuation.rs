use crate::enums::{AggregationOp, PortfolioEntityType};
use crate::error::CoreError;
use crate::identifiers::ResourceId;
use crate::instruments::InstrumentEconomics;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Metric keys the tutorials request and read back.
pub mod metrics {
    pub const PV: &str = "Valuation/PV";
    pub const PV_AMOUNT: &str = "Valuation/PV/Amount";
    pub const VALUATION_DATE: &str = "Analytic/default/ValuationDate";
    pub const CURRENCY: &str = "Holding/default/Currency";
    pub const INSTRUMENT_NAME: &str = "Instrument/default/Name";
    pub const HOLDING_ID: &str = "Holding/default/HoldingIdentifier";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateSpec {
    pub key: String,
    pub op: AggregationOp,
}

impl AggregateSpec {
    pub fn new(key: impl Into<String>, op: AggregationOp) -> Self {
        Self { key: key.into(), op }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSchedule {
    pub effective_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntityId {
    pub scope: String,
    pub code: String,
    pub portfolio_entity_type: PortfolioEntityType,
}

impl PortfolioEntityId {
    pub fn single(portfolio: &ResourceId) -> Self {
        Self {
            scope: portfolio.scope.clone(),
            code: portfolio.code.clone(),
            portfolio_entity_type: PortfolioEntityType::SinglePortfolio,
        }
    }
}

/// Values the holdings of one or more portfolios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRequest {
    pub recipe_id: ResourceId,
    pub metrics: Vec<AggregateSpec>,
    #[serde(default)]
    pub group_by: Vec<String>,
    pub valuation_schedule: ValuationSchedule,
    pub portfolio_entity_ids: Vec<PortfolioEntityId>,
}

/// An instrument and a quantity, valued without being booked anywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedInstrument {
    pub quantity: Decimal,
    pub holding_identifier: String,
    pub instrument: InstrumentEconomics,
}

/// Values a list of inline instruments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineValuationRequest {
    pub recipe_id: ResourceId,
    pub metrics: Vec<AggregateSpec>,
    #[serde(default)]
    pub group_by: Vec<String>,
    pub valuation_schedule: ValuationSchedule,
    pub instruments: Vec<WeightedInstrument>,
}

/// One row of an aggregation result: metric key to value.
///
/// The platform returns heterogenous JSON values (numbers, strings, dates),
/// so rows are kept untyped and read through the accessors below.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValuationRow(pub BTreeMap<String, Value>);

impl ValuationRow {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Reads a numeric metric, accepting both JSON numbers and numeric strings.
    pub fn decimal(&self, key: &str) -> Result<Decimal, CoreError> {
        let value = self
            .get(key)
            .ok_or_else(|| CoreError::MissingMetric(key.to_string()))?;
        let text = match value {
            Value::Number(n) => n.to_string(),
            Value::String(s) => s.clone(),
            other => {
                return Err(CoreError::UnexpectedMetric {
                    key: key.to_string(),
                    value: other.to_string(),
                });
            }
        };
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|e| CoreError::InvalidInput(key.to_string(), e.to_string()))
    }

    pub fn string(&self, key: &str) -> Result<&str, CoreError> {
        match self.get(key) {
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(other) => Err(CoreError::UnexpectedMetric {
                key: key.to_string(),
                value: other.to_string(),
            }),
            None => Err(CoreError::MissingMetric(key.to_string())),
        }
    }

    /// Present value of the row, whichever of the two PV keys the platform used.
    pub fn present_value(&self) -> Result<Decimal, CoreError> {
        self.decimal(metrics::PV_AMOUNT)
            .or_else(|_| self.decimal(metrics::PV))
    }
}
