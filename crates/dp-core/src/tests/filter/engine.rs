use crate::tests::deal;
use crate::{Deal, DealId, FilterCriteria, Priority, Stage, ValueBand, Verification, visible};

use std::collections::HashMap;

fn deals(list: Vec<Deal>) -> (Vec<DealId>, HashMap<DealId, Deal>) {
    let ids = list.iter().map(|d| d.id.clone()).collect();
    let map = list.into_iter().map(|d| (d.id.clone(), d)).collect();
    (ids, map)
}

fn visible_ids(
    ids: &[DealId],
    map: &HashMap<DealId, Deal>,
    filters: &FilterCriteria,
    search: &str,
) -> Vec<String> {
    visible(ids, map, filters, search)
        .into_iter()
        .map(|d| d.id.to_string())
        .collect()
}

fn sample() -> (Vec<DealId>, HashMap<DealId, Deal>) {
    let mut paystack = deal("p", Stage::Inbox);
    paystack.company_name = "Paystack".to_string();
    paystack.amount = 250_000.0;
    paystack.priority = Priority::High;
    paystack.industry = vec!["Fintech".to_string()];
    paystack.tier = Some(2);
    paystack.owner_name = "Ada Obi".to_string();

    let mut kobo = deal("k", Stage::Inbox);
    kobo.company_name = "Kobo360".to_string();
    kobo.amount = 100_000.0;
    kobo.priority = Priority::Low;
    kobo.industry = vec!["Logistics".to_string()];
    kobo.tier = Some(1);
    kobo.is_syndicate = true;
    kobo.syndicate_lead = Some("Savannah Fund".to_string());

    let mut andela = deal("a", Stage::Inbox);
    andela.company_name = "Andela".to_string();
    andela.amount = 75_500.0;
    andela.industry = vec!["Edtech".to_string(), "Fintech".to_string()];

    deals(vec![paystack, kobo, andela])
}

#[test]
fn given_no_filters_and_empty_search_then_everything_in_column_order() {
    let (ids, map) = sample();

    let result = visible_ids(&ids, &map, &FilterCriteria::default(), "");

    assert_eq!(result, vec!["p", "k", "a"]);
}

#[test]
fn given_search_in_any_case_then_same_result() {
    let (ids, map) = sample();
    let filters = FilterCriteria::default();

    let lower = visible_ids(&ids, &map, &filters, "paystack");
    let upper = visible_ids(&ids, &map, &filters, "PAYSTACK");

    assert_eq!(lower, vec!["p"]);
    assert_eq!(lower, upper);
}

#[test]
fn given_search_text_then_matches_owner_amount_and_syndicate_lead() {
    let (ids, map) = sample();
    let filters = FilterCriteria::default();

    assert_eq!(visible_ids(&ids, &map, &filters, "ada"), vec!["p"]);
    assert_eq!(visible_ids(&ids, &map, &filters, "755"), vec!["a"]);
    assert_eq!(visible_ids(&ids, &map, &filters, "savannah"), vec!["k"]);
    assert!(visible_ids(&ids, &map, &filters, "nothing-matches").is_empty());
}

#[test]
fn given_priority_filter_then_exact_match_only() {
    let (ids, map) = sample();
    let filters = FilterCriteria {
        priority: Some(Priority::Low),
        ..Default::default()
    };

    assert_eq!(visible_ids(&ids, &map, &filters, ""), vec!["k"]);
}

#[test]
fn given_sector_filter_then_industry_must_contain_it() {
    let (ids, map) = sample();
    let filters = FilterCriteria {
        sector: Some("Fintech".to_string()),
        ..Default::default()
    };

    assert_eq!(visible_ids(&ids, &map, &filters, ""), vec!["p", "a"]);
}

#[test]
fn given_blank_sector_then_filter_inactive() {
    let (ids, map) = sample();
    let filters = FilterCriteria {
        sector: Some(String::new()),
        ..Default::default()
    };

    assert!(filters.is_empty());
    assert_eq!(visible_ids(&ids, &map, &filters, "").len(), 3);
}

#[test]
fn given_verification_filters_then_tiers_checked() {
    let (ids, map) = sample();
    let verified = FilterCriteria {
        verification: Some(Verification::Verified),
        ..Default::default()
    };
    let tier_two = FilterCriteria {
        verification: Some(Verification::Tier(2)),
        ..Default::default()
    };

    assert_eq!(visible_ids(&ids, &map, &verified, ""), vec!["p", "k"]);
    assert_eq!(visible_ids(&ids, &map, &tier_two, ""), vec!["p"]);
}

#[test]
fn given_value_filter_at_boundary_then_high_inclusive() {
    let (ids, map) = sample();
    let high = FilterCriteria {
        value: Some(ValueBand::High),
        ..Default::default()
    };
    let low = FilterCriteria {
        value: Some(ValueBand::Low),
        ..Default::default()
    };

    assert_eq!(visible_ids(&ids, &map, &high, ""), vec!["p", "k"]);
    assert_eq!(visible_ids(&ids, &map, &low, ""), vec!["a"]);
}

#[test]
fn given_combined_filters_then_all_must_pass() {
    let (ids, map) = sample();
    let filters = FilterCriteria {
        sector: Some("Fintech".to_string()),
        value: Some(ValueBand::High),
        ..Default::default()
    };

    assert_eq!(visible_ids(&ids, &map, &filters, "pay"), vec!["p"]);
    assert!(visible_ids(&ids, &map, &filters, "andela").is_empty());
}

#[test]
fn given_dangling_id_then_silently_dropped() {
    let (mut ids, map) = sample();
    ids.insert(1, DealId::from("ghost"));

    let result = visible_ids(&ids, &map, &FilterCriteria::default(), "");

    assert_eq!(result, vec!["p", "k", "a"]);
}
