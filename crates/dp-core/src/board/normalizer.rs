//! Deal normalizer: raw list-endpoint records to flat view-models bucketed
//! by stage.
//!
//! Partial records never fail. Missing or unknown values fall back to fixed
//! placeholders so every record still renders as a card.

use crate::{Deal, DealId, Priority, RawDeal, Stage};

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::str::FromStr;

use url::form_urlencoded;

pub const UNKNOWN_COMPANY_NAME: &str = "Unknown";
pub const UNASSIGNED_OWNER_NAME: &str = "Unassigned";

const AVATAR_SERVICE_URL: &str = "https://ui-avatars.com/api/";

/// Output of [`normalize`], ready for `Board::replace`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedDeals {
    pub columns: HashMap<Stage, Vec<DealId>>,
    pub deals: HashMap<DealId, Deal>,
}

/// Generated avatar image for a display name
pub fn avatar_url(name: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("name", name.trim())
        .append_pair("background", "random")
        .finish();
    format!("{AVATAR_SERVICE_URL}?{query}")
}

/// Normalize a list response, preserving server order within each stage.
///
/// Records without an id are skipped; a repeated id keeps its first record.
pub fn normalize(raw_deals: Vec<RawDeal>) -> NormalizedDeals {
    let mut normalized = NormalizedDeals::default();

    for raw in raw_deals {
        let Some(id) = raw.id.clone() else {
            log::warn!("Skipping deal record without an id");
            continue;
        };

        let deal = normalize_one(id.clone(), raw);
        let stage = deal.stage;

        match normalized.deals.entry(id) {
            Entry::Occupied(entry) => {
                log::warn!("Skipping duplicate deal record {}", entry.key());
            }
            Entry::Vacant(entry) => {
                normalized
                    .columns
                    .entry(stage)
                    .or_default()
                    .push(entry.key().clone());
                entry.insert(deal);
            }
        }
    }

    normalized
}

fn normalize_one(id: DealId, raw: RawDeal) -> Deal {
    let stage = match raw.stage.as_deref().map(Stage::from_str) {
        Some(Ok(stage)) => stage,
        Some(Err(_)) | None => {
            log::debug!(
                "Deal {} has stage {:?}, defaulting to {}",
                id,
                raw.stage,
                Stage::Inbox
            );
            Stage::Inbox
        }
    };

    let priority = raw
        .priority
        .as_deref()
        .and_then(|p| Priority::from_str(p).ok())
        .unwrap_or_default();

    let company = raw.company.unwrap_or_else(|| {
        log::debug!("Deal {} has no company, using placeholders", id);
        Default::default()
    });
    let company_name = company
        .name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_COMPANY_NAME.to_string());
    let logo = company
        .logo
        .filter(|logo| !logo.is_empty())
        .unwrap_or_else(|| avatar_url(&company_name));

    let owner = raw.owner.unwrap_or_default();
    let owner_name = owner
        .name
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| UNASSIGNED_OWNER_NAME.to_string());
    let owner_avatar = owner
        .avatar
        .filter(|avatar| !avatar.is_empty())
        .unwrap_or_else(|| avatar_url(&owner_name));

    Deal {
        id,
        stage,
        amount: raw.amount.filter(|a| a.is_finite()).unwrap_or(0.0).max(0.0),
        company_name,
        logo,
        industry: company.industry,
        website: company.website,
        location: company.location,
        tier: company.tier,
        score: company.score,
        owner_name,
        owner_avatar,
        priority,
        close_date: raw.expected_close_date,
        last_contact: raw.last_contact,
        last_contact_type: raw.last_contact_type,
        documents_count: raw.documents_count.unwrap_or(0),
        is_syndicate: raw.is_syndicate.unwrap_or(false),
        syndicate_lead: raw.syndicate_lead,
        notes: raw.notes,
    }
}
