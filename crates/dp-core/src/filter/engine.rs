//! Filter engine. Pure: the board is never touched.

use crate::{Deal, DealId, FilterCriteria};

use std::collections::HashMap;

/// Deals from `deal_ids` that pass the search and every active filter, in
/// column order. Ids missing from `deals` are dropped.
pub fn visible<'a>(
    deal_ids: &[DealId],
    deals: &'a HashMap<DealId, Deal>,
    filters: &FilterCriteria,
    search_query: &str,
) -> Vec<&'a Deal> {
    let query = search_query.trim().to_lowercase();

    deal_ids
        .iter()
        .filter_map(|id| deals.get(id))
        .filter(|deal| matches_search(deal, &query))
        .filter(|deal| filters.matches(deal))
        .collect()
}

/// `query` must already be lowercased
fn matches_search(deal: &Deal, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let contains = |text: &str| text.to_lowercase().contains(query);

    contains(&deal.company_name)
        || deal.amount.to_string().contains(query)
        || contains(&deal.owner_name)
        || deal.syndicate_lead.as_deref().is_some_and(contains)
}
