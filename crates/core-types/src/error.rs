use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Metric '{0}' is missing from the valuation row")]
    MissingMetric(String),

    #[error("Metric '{key}' has an unexpected shape: {value}")]
    UnexpectedMetric { key: String, value: String },
}
