use crate::identifiers::ResourceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for creating a transaction portfolio inside a scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionPortfolioRequest {
    pub display_name: String,
    pub code: String,
    pub base_currency: String,
    /// The portfolio cannot hold transactions dated before this instant.
    pub created: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Corporate actions from this source are applied to the portfolio's holdings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corporate_action_source_id: Option<ResourceId>,
}

/// A portfolio as returned by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: ResourceId,
    pub display_name: String,
    #[serde(default)]
    pub base_currency: Option<String>,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
}
