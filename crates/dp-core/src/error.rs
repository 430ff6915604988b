use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid stage: {value} {location}")]
    InvalidStage {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid priority: {value} {location}")]
    InvalidPriority {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid verification filter: {value} {location}")]
    InvalidVerification {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid value band: {value} {location}")]
    InvalidValueBand {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid amount: {value} (must be finite and non-negative) {location}")]
    InvalidAmount { value: f64, location: ErrorLocation },

    #[error("Index {index} out of range for column {stage} (len {len}) {location}")]
    IndexOutOfRange {
        stage: String,
        index: usize,
        len: usize,
        location: ErrorLocation,
    },

    #[error("Deal {expected} is not at {stage}[{index}] (found {found}) {location}")]
    DealMismatch {
        stage: String,
        index: usize,
        expected: String,
        found: String,
        location: ErrorLocation,
    },

    #[error("Unknown deal: {id} {location}")]
    UnknownDeal { id: String, location: ErrorLocation },
}

pub type Result<T> = StdResult<T, CoreError>;
