use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Verification filter as offered in the filter bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// Any tier of 1 or above
    Verified,
    /// Exactly this tier
    Tier(u8),
}

impl Verification {
    pub fn matches(&self, tier: Option<u8>) -> bool {
        match (self, tier) {
            (Self::Verified, Some(tier)) => tier >= 1,
            (Self::Tier(wanted), Some(tier)) => tier == *wanted,
            (_, None) => false,
        }
    }
}

impl FromStr for Verification {
    type Err = CoreError;

    /// Accepts `Verified` or `Tier N`
    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("verified") {
            return Ok(Self::Verified);
        }

        let tier = trimmed
            .split_once(char::is_whitespace)
            .filter(|(word, _)| word.eq_ignore_ascii_case("tier"))
            .and_then(|(_, n)| n.trim().parse::<u8>().ok());

        tier.map(Self::Tier)
            .ok_or_else(|| CoreError::InvalidVerification {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

impl std::fmt::Display for Verification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Verified => write!(f, "Verified"),
            Self::Tier(n) => write!(f, "Tier {n}"),
        }
    }
}
