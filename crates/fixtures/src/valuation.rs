use crate::dates::midnight;
use chrono::NaiveDate;
use core_types::valuation::metrics;
use core_types::{
    AggregateSpec, AggregationOp, InlineValuationRequest, InstrumentEconomics, PortfolioEntityId,
    ResourceId, ValuationRequest, ValuationSchedule, WeightedInstrument,
};
use rust_decimal::Decimal;

/// Valuation date, holding currency and summed present value.
pub fn pv_metrics() -> Vec<AggregateSpec> {
    vec![
        AggregateSpec::new(metrics::VALUATION_DATE, AggregationOp::Value),
        AggregateSpec::new(metrics::CURRENCY, AggregationOp::Value),
        AggregateSpec::new(metrics::PV, AggregationOp::Sum),
    ]
}

/// Values one portfolio as of `date`, one row per holding currency.
pub fn portfolio_valuation_request(
    recipe: &ResourceId,
    portfolio: &ResourceId,
    date: NaiveDate,
) -> ValuationRequest {
    ValuationRequest {
        recipe_id: recipe.clone(),
        metrics: pv_metrics(),
        group_by: vec![metrics::CURRENCY.to_string()],
        valuation_schedule: ValuationSchedule {
            effective_at: midnight(date),
        },
        portfolio_entity_ids: vec![PortfolioEntityId::single(portfolio)],
    }
}

/// A single instrument held in `quantity`, identified in results by `holding_id`.
pub fn weighted(
    holding_id: &str,
    quantity: Decimal,
    instrument: InstrumentEconomics,
) -> WeightedInstrument {
    WeightedInstrument {
        quantity,
        holding_identifier: holding_id.to_string(),
        instrument,
    }
}

/// Values instruments inline as of `date`, one row per holding identifier.
pub fn inline_valuation_request(
    recipe: &ResourceId,
    date: NaiveDate,
    instruments: Vec<WeightedInstrument>,
) -> InlineValuationRequest {
    InlineValuationRequest {
        recipe_id: recipe.clone(),
        metrics: vec![
            AggregateSpec::new(metrics::HOLDING_ID, AggregationOp::Value),
            AggregateSpec::new(metrics::VALUATION_DATE, AggregationOp::Value),
            AggregateSpec::new(metrics::PV, AggregationOp::Value),
        ],
        group_by: vec![metrics::HOLDING_ID.to_string()],
        valuation_schedule: ValuationSchedule {
            effective_at: midnight(date),
        },
        instruments,
    }
}
