use crate::{CoreError, CoreResult, Stage};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// Body of the create-deal request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDeal {
    pub company_id: String,
    pub stage: Stage,
    pub amount: f64,
    pub probability: u8,
}

impl NewDeal {
    /// Amounts must be finite and non-negative
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(CoreError::InvalidAmount {
                value: self.amount,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
