use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Boundary between low- and high-value deals. Inclusive on the high side.
pub const HIGH_VALUE_THRESHOLD: f64 = 100_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueBand {
    /// `amount >= HIGH_VALUE_THRESHOLD`
    High,
    /// `amount < HIGH_VALUE_THRESHOLD`
    Low,
}

impl ValueBand {
    pub fn matches(&self, amount: f64) -> bool {
        match self {
            Self::High => amount >= HIGH_VALUE_THRESHOLD,
            Self::Low => amount < HIGH_VALUE_THRESHOLD,
        }
    }
}

impl FromStr for ValueBand {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "low" => Ok(Self::Low),
            _ => Err(CoreError::InvalidValueBand {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
