//! Master instruments upserted in batches, keyed by client-internal code.

use crate::check_failed;
use crate::error::ScenarioError;
use crate::teardown::{Cleanup, Resource};
use api_client::PlatformClient;
use core_types::{InstrumentDefinition, identifier_types};
use fixtures::instruments::keyed_by_client_internal;
use std::collections::BTreeMap;

/// Upserts every definition in one batch and returns the platform id of each,
/// keyed by client-internal code.
///
/// Every instrument the platform accepted is registered with `cleanup`, even
/// when other items of the batch were rejected and the call fails.
pub async fn upsert_instruments(
    client: &dyn PlatformClient,
    definitions: Vec<InstrumentDefinition>,
    cleanup: &mut Cleanup,
) -> Result<BTreeMap<String, String>, ScenarioError> {
    let batch = keyed_by_client_internal(definitions);
    let response = client.upsert_instruments(None, &batch).await?;

    for key in response.values.keys() {
        cleanup.track(Resource::Instrument {
            identifier_type: identifier_types::CLIENT_INTERNAL.to_string(),
            identifier: key.clone(),
        });
    }
    check_failed("upsert instruments", &response.failed)?;

    let mut uids = BTreeMap::new();
    for key in batch.keys() {
        let instrument = response
            .values
            .get(key)
            .ok_or_else(|| ScenarioError::MissingResponse {
                operation: "upsert instruments",
                key: key.clone(),
            })?;
        uids.insert(key.clone(), instrument.lusid_instrument_id.clone());
    }
    tracing::debug!(count = uids.len(), "Instruments upserted.");
    Ok(uids)
}

/// Upserts a single instrument and returns its platform id.
pub(crate) async fn upsert_instrument(
    client: &dyn PlatformClient,
    definition: InstrumentDefinition,
    cleanup: &mut Cleanup,
) -> Result<String, ScenarioError> {
    let uids = upsert_instruments(client, vec![definition], cleanup).await?;
    uids.into_values().next().ok_or(ScenarioError::MissingResponse {
        operation: "upsert instruments",
        key: String::new(),
    })
}

/// Looks up the platform id of an instrument by its client-internal code.
pub async fn resolve_uid(
    client: &dyn PlatformClient,
    client_internal: &str,
) -> Result<String, ScenarioError> {
    let instrument = client
        .get_instrument(identifier_types::CLIENT_INTERNAL, client_internal)
        .await?;
    Ok(instrument.lusid_instrument_id)
}
