use crate::check_failed;
use crate::error::ScenarioError;
use api_client::PlatformClient;
use core_types::{ComplexMarketDataId, Quote, UpsertComplexMarketDataRequest, UpsertQuoteRequest};
use fixtures::quotes;
use std::collections::HashMap;

/// Upserts quotes into `scope`, failing if any of them is rejected.
pub async fn upload_quotes(
    client: &dyn PlatformClient,
    scope: &str,
    requests: Vec<UpsertQuoteRequest>,
) -> Result<HashMap<String, UpsertQuoteRequest>, ScenarioError> {
    let batch = quotes::keyed(requests);
    let response = client.upsert_quotes(scope, &batch).await?;
    check_failed("upsert quotes", &response.failed)?;
    tracing::debug!(scope, count = response.values.len(), "Quotes upserted.");
    Ok(batch)
}

/// Upserts one quote, then reads back every quote of the same series effective
/// at the same time.
pub async fn quote_round_trip(
    client: &dyn PlatformClient,
    scope: &str,
    request: UpsertQuoteRequest,
) -> Result<Vec<Quote>, ScenarioError> {
    let effective_at = request.quote_id.effective_at;
    let batch = upload_quotes(client, scope, vec![request]).await?;

    let response = client
        .get_quotes(scope, effective_at, &quotes::lookup_for(&batch))
        .await?;
    check_failed("get quotes", &response.failed)?;
    if !response.not_found.is_empty() {
        tracing::warn!(scope, missing = response.not_found.len(), "Some quotes were not found.");
    }
    Ok(response.values.into_values().collect())
}

/// Upserts complex market data items (curves, surfaces) into `scope`.
pub async fn upload_complex_market_data(
    client: &dyn PlatformClient,
    scope: &str,
    items: Vec<UpsertComplexMarketDataRequest>,
) -> Result<Vec<ComplexMarketDataId>, ScenarioError> {
    let batch: HashMap<String, UpsertComplexMarketDataRequest> = items
        .into_iter()
        .map(|item| (item.market_data_id.market_asset.clone(), item))
        .collect();
    let response = client.upsert_complex_market_data(scope, &batch).await?;
    check_failed("upsert complex market data", &response.failed)?;
    Ok(response.values.into_values().collect())
}
