use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A scoped identifier used for portfolios, recipes, corporate-action sources
/// and anything else the platform keys by `(scope, code)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId {
    pub scope: String,
    pub code: String,
}

impl ResourceId {
    pub fn new(scope: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            code: code.into(),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.scope, self.code)
    }
}

/// The value of one instrument identifier, as sent when defining an instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstrumentIdValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_at: Option<DateTime<Utc>>,
}

impl InstrumentIdValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            effective_at: None,
        }
    }
}

/// Identifier schemes understood by the platform.
pub mod identifier_types {
    pub const CLIENT_INTERNAL: &str = "ClientInternal";
    pub const FIGI: &str = "Figi";
    pub const ISIN: &str = "Isin";
    pub const CURRENCY: &str = "Currency";
    /// The platform-generated unique instrument id.
    pub const LUID: &str = "LusidInstrumentId";

    /// Property key under which an identifier type is stored on an instrument.
    pub fn property_key(identifier_type: &str) -> String {
        format!("Instrument/default/{}", identifier_type)
    }
}
