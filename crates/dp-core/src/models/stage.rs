//! Stage registry - the fixed, ordered set of pipeline columns.

use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Pipeline stage. Declaration order is the left-to-right column order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// New, untriaged deals
    #[default]
    Inbox,
    Diligence,
    Negotiation,
    Committed,
    Done,
    /// Deals the investor declined
    Passed,
}

impl Stage {
    /// Every stage in column order.
    pub const ALL: [Stage; 6] = [
        Stage::Inbox,
        Stage::Diligence,
        Stage::Negotiation,
        Stage::Committed,
        Stage::Done,
        Stage::Passed,
    ];

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Diligence => "diligence",
            Self::Negotiation => "negotiation",
            Self::Committed => "committed",
            Self::Done => "done",
            Self::Passed => "passed",
        }
    }

    /// Column heading
    pub fn title(&self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Diligence => "Diligence",
            Self::Negotiation => "Negotiation",
            Self::Committed => "Committed",
            Self::Done => "Done",
            Self::Passed => "Passed",
        }
    }

    /// Zero-based column position
    pub fn position(&self) -> usize {
        *self as usize
    }
}

impl FromStr for Stage {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "inbox" => Ok(Self::Inbox),
            "diligence" => Ok(Self::Diligence),
            "negotiation" => Ok(Self::Negotiation),
            "committed" => Ok(Self::Committed),
            "done" => Ok(Self::Done),
            "passed" => Ok(Self::Passed),
            _ => Err(CoreError::InvalidStage {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
