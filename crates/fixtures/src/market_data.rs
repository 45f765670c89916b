use crate::dates::{midnight, plus_days};
use chrono::NaiveDate;
use core_types::{ComplexMarketData, ComplexMarketDataId, UpsertComplexMarketDataRequest};
use rust_decimal::Decimal;

/// A discount factor curve for `market_asset` (e.g. `"USD/USDOIS"`).
///
/// `points` pairs a tenor in days from `base_date` with its discount factor.
pub fn discount_curve(
    provider: &str,
    market_asset: &str,
    base_date: NaiveDate,
    points: &[(u64, Decimal)],
) -> UpsertComplexMarketDataRequest {
    UpsertComplexMarketDataRequest {
        market_data_id: ComplexMarketDataId {
            provider: provider.to_string(),
            price_source: None,
            lineage: None,
            effective_at: midnight(base_date),
            market_asset: market_asset.to_string(),
        },
        market_data: ComplexMarketData::DiscountFactorCurveData {
            base_date: midnight(base_date),
            dates: points
                .iter()
                .map(|(days, _)| midnight(plus_days(base_date, *days)))
                .collect(),
            discount_factors: points.iter().map(|(_, df)| *df).collect(),
        },
    }
}
