use chrono::NaiveDateTime;

use super::{store::StoreError, validation::ValidationError};

#[derive(thiserror::Error, Debug)]
pub enum TrafficError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("{0}")]
    StoreError(#[from] StoreError),
    #[error("invalid observation: {source}")]
    ValidationError {
        #[from]
        source: ValidationError,
    },
    #[error("invalid time range, start {start} is after end {end}")]
    InvalidTimeRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
