use crate::identifiers::ResourceId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCorporateActionSourceRequest {
    pub scope: String,
    pub code: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateActionSource {
    pub id: ResourceId,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// One side of a transition: "for every unit of this instrument, take
/// `units_factor` units at `cost_factor` of the original cost".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateActionTransitionComponent {
    #[serde(default)]
    pub instrument_identifiers: BTreeMap<String, String>,
    pub units_factor: Decimal,
    pub cost_factor: Decimal,
}

/// Maps a holding in the input instrument onto holdings in the outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateActionTransition {
    pub input_transition: CorporateActionTransitionComponent,
    pub output_transitions: Vec<CorporateActionTransitionComponent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertCorporateActionRequest {
    pub corporate_action_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub announcement_date: DateTime<Utc>,
    /// Holdings are transformed (unsettled) from this date.
    pub ex_date: DateTime<Utc>,
    pub record_date: DateTime<Utc>,
    /// Holdings settle into their transformed state on this date.
    pub payment_date: DateTime<Utc>,
    pub transitions: Vec<CorporateActionTransition>,
}

/// A corporate action as stored by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorporateAction {
    pub corporate_action_code: String,
    #[serde(default)]
    pub source_id: Option<ResourceId>,
    #[serde(default)]
    pub description: Option<String>,
    pub announcement_date: DateTime<Utc>,
    pub ex_date: DateTime<Utc>,
    pub record_date: DateTime<Utc>,
    pub payment_date: DateTime<Utc>,
    #[serde(default)]
    pub transitions: Vec<CorporateActionTransition>,
}
