use crate::enums::PropertyDomain;
use crate::identifiers::ResourceId;
use crate::quotes::MetricValue;
use serde::{Deserialize, Serialize};

/// A property value: either a label (string) or a metric (number + unit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metric_value: Option<MetricValue>,
}

impl PropertyValue {
    pub fn label(value: impl Into<String>) -> Self {
        Self {
            label_value: Some(value.into()),
            metric_value: None,
        }
    }
}

/// A property with no effective-date range, as attached to instruments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerpetualProperty {
    /// Full key in the form `Domain/scope/code`.
    pub key: String,
    pub value: PropertyValue,
}

/// The data type of a property, itself a scoped resource (`system/string`, ...).
pub type DataTypeId = ResourceId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinitionRequest {
    pub domain: PropertyDomain,
    pub scope: String,
    pub code: String,
    pub value_required: bool,
    pub display_name: String,
    pub data_type_id: DataTypeId,
    /// `"Perpetual"` or `"TimeVariant"`.
    pub life_time: String,
}

impl PropertyDefinitionRequest {
    /// The key the new property will be addressable by.
    pub fn key(&self) -> String {
        format!("{}/{}/{}", self.domain.as_str(), self.scope, self.code)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    pub key: String,
    pub display_name: String,
    pub data_type_id: DataTypeId,
    #[serde(default)]
    pub life_time: Option<String>,
}
