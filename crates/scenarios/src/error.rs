use api_client::error::ApiError;
use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Platform call failed: {0}")]
    Api(#[from] ApiError),

    /// A batch call returned normally but rejected some of its items.
    #[error("{operation} rejected {} item(s): {}", .failed.len(), .failed.join(", "))]
    PartialFailure {
        operation: &'static str,
        failed: Vec<String>,
    },

    #[error("{operation} response did not include '{key}'")]
    MissingResponse { operation: &'static str, key: String },

    #[error("Scenario cannot run: {0}")]
    MissingPrerequisite(&'static str),

    #[error("Unreadable valuation result: {0}")]
    Valuation(#[from] CoreError),
}
