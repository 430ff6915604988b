use crate::Stage;

use std::str::FromStr;

#[test]
fn test_stage_order_is_fixed() {
    let order: Vec<&str> = Stage::ALL.iter().map(Stage::as_str).collect();
    assert_eq!(
        order,
        vec!["inbox", "diligence", "negotiation", "committed", "done", "passed"]
    );
}

#[test]
fn test_stage_position_matches_order() {
    for (i, stage) in Stage::ALL.iter().enumerate() {
        assert_eq!(stage.position(), i);
    }
}

#[test]
fn test_stage_from_str_roundtrips_every_stage() {
    for stage in Stage::ALL {
        assert_eq!(Stage::from_str(stage.as_str()).unwrap(), stage);
    }
}

#[test]
fn test_stage_from_str_rejects_unknown() {
    assert!(Stage::from_str("weird_stage").is_err());
    assert!(Stage::from_str("Inbox").is_err());
}

#[test]
fn test_stage_titles() {
    assert_eq!(Stage::Inbox.title(), "Inbox");
    assert_eq!(Stage::Passed.title(), "Passed");
}

#[test]
fn test_stage_default_is_inbox() {
    assert_eq!(Stage::default(), Stage::Inbox);
}

#[test]
fn test_stage_serializes_snake_case() {
    assert_eq!(
        serde_json::to_string(&Stage::Negotiation).unwrap(),
        "\"negotiation\""
    );
}
