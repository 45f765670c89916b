use crate::dates::midnight;
use chrono::NaiveDate;
use core_types::{MetricValue, QuoteId, QuoteSeriesId, QuoteType, UpsertQuoteRequest};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// The provider tutorials attribute their own quotes to.
pub const DEFAULT_PROVIDER: &str = "Lusid";

/// A quote series for a price on the `mid` field.
pub fn price_series(
    provider: &str,
    instrument_id: &str,
    instrument_id_type: &str,
) -> QuoteSeriesId {
    QuoteSeriesId {
        provider: provider.to_string(),
        price_source: None,
        instrument_id: instrument_id.to_string(),
        instrument_id_type: instrument_id_type.to_string(),
        quote_type: QuoteType::Price,
        field: "mid".to_string(),
    }
}

/// A quote for `series` effective at the start of `date`.
pub fn quote(
    series: QuoteSeriesId,
    date: NaiveDate,
    value: Decimal,
    unit: &str,
) -> UpsertQuoteRequest {
    UpsertQuoteRequest {
        quote_id: QuoteId {
            quote_series_id: series,
            effective_at: midnight(date),
        },
        metric_value: MetricValue::new(value, unit),
        lineage: None,
    }
}

/// Keys a batch of quote requests by position, e.g. `quote-0`, `quote-1`.
pub fn keyed(quotes: Vec<UpsertQuoteRequest>) -> HashMap<String, UpsertQuoteRequest> {
    quotes
        .into_iter()
        .enumerate()
        .map(|(i, q)| (format!("quote-{}", i), q))
        .collect()
}

/// The lookup request matching a set of upserted quotes, keyed the same way.
pub fn lookup_for(quotes: &HashMap<String, UpsertQuoteRequest>) -> HashMap<String, QuoteSeriesId> {
    quotes
        .iter()
        .map(|(key, q)| (key.clone(), q.quote_id.quote_series_id.clone()))
        .collect()
}
