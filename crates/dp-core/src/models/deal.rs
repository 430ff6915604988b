use crate::{DealId, Priority, Stage};

use serde::Serialize;

/// Flat deal view-model rendered on a card.
///
/// Company and owner fields are a snapshot taken at fetch time.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    pub id: DealId,
    /// Stage reported by the server at fetch time. Column membership in the
    /// board is authoritative after a move.
    pub stage: Stage,
    pub amount: f64,

    // Company snapshot
    pub company_name: String,
    pub logo: String,
    pub industry: Vec<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub tier: Option<u8>,
    pub score: Option<f64>,

    // Owner snapshot
    pub owner_name: String,
    pub owner_avatar: String,

    pub priority: Priority,
    pub close_date: Option<String>,
    pub last_contact: Option<String>,
    pub last_contact_type: Option<String>,
    pub documents_count: u32,
    pub is_syndicate: bool,
    pub syndicate_lead: Option<String>,
    pub notes: Option<String>,
}

impl Deal {
    /// Whether the company carries any verification tier
    pub fn is_verified(&self) -> bool {
        self.tier.is_some_and(|tier| tier >= 1)
    }

    pub fn has_sector(&self, sector: &str) -> bool {
        self.industry.iter().any(|s| s == sector)
    }
}
