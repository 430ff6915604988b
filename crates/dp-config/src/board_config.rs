use crate::ConfigError;

use std::str::FromStr;

use serde::Deserialize;

/// What to do with an optimistic cross-column move when saving it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Leave the card where it was dropped; the next refetch reconciles
    #[default]
    KeepOptimistic,
    /// Move the card back to where it came from
    Rollback,
}

impl FailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KeepOptimistic => "keep_optimistic",
            Self::Rollback => "rollback",
        }
    }
}

impl FromStr for FailurePolicy {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep_optimistic" => Ok(Self::KeepOptimistic),
            "rollback" => Ok(Self::Rollback),
            _ => Err(ConfigError::config(format!(
                "board.failure_policy must be keep_optimistic or rollback, got '{s}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct BoardConfig {
    pub failure_policy: FailurePolicy,
}
