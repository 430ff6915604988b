use crate::board::board::PartitionViolation;
use crate::tests::{board_with, deal, ids};
use crate::{Board, CoreError, DealId, Stage};

use std::collections::HashMap;

use googletest::prelude::*;

// =========================================================================
// Construction and replace
// =========================================================================

#[test]
fn given_new_board_then_every_stage_has_an_empty_column() {
    let board = Board::new();

    let stages: Vec<Stage> = board.columns().map(|c| c.id).collect();
    assert_eq!(stages, Stage::ALL.to_vec());
    assert!(board.is_empty());
    assert_eq!(board.column_order(), &Stage::ALL[..]);
}

#[test]
fn given_populated_board_when_replaced_then_old_state_is_gone() {
    // Given
    let mut board = board_with(&[(Stage::Inbox, &["a", "b"]), (Stage::Done, &["c"])]);

    // When
    let mut columns = HashMap::new();
    columns.insert(Stage::Passed, vec![DealId::from("z")]);
    let mut deals = HashMap::new();
    deals.insert(DealId::from("z"), deal("z", Stage::Passed));
    board.replace(columns, deals);

    // Then
    assert_that!(ids(&board, Stage::Inbox), is_empty());
    assert_that!(ids(&board, Stage::Done), is_empty());
    assert_eq!(ids(&board, Stage::Passed), vec!["z"]);
    assert_that!(board.deals().len(), eq(1));
    assert!(board.check_partition().is_ok());
}

#[test]
fn test_locate_finds_column_and_index() {
    let board = board_with(&[(Stage::Inbox, &["a"]), (Stage::Committed, &["c", "d"])]);

    assert_eq!(board.locate(&DealId::from("d")), Some((Stage::Committed, 1)));
    assert_eq!(board.locate(&DealId::from("missing")), None);
}

#[test]
fn test_sectors_sorted_and_distinct() {
    let mut board = board_with(&[]);
    let mut a = deal("a", Stage::Inbox);
    a.industry = vec!["Fintech".to_string(), "AI".to_string()];
    let mut b = deal("b", Stage::Inbox);
    b.industry = vec!["Fintech".to_string()];

    let columns = HashMap::from([(Stage::Inbox, vec![a.id.clone(), b.id.clone()])]);
    let deals = HashMap::from([(a.id.clone(), a), (b.id.clone(), b)]);
    board.replace(columns, deals);

    assert_eq!(board.sectors(), vec!["AI".to_string(), "Fintech".to_string()]);
}

// =========================================================================
// Moves
// =========================================================================

#[test]
fn given_column_when_moved_within_then_reordered_and_deals_untouched() {
    // Given
    let mut board = board_with(&[(Stage::Diligence, &["a", "b", "c"])]);
    let deals_before = board.deals().clone();

    // When
    board.move_within_column(Stage::Diligence, 0, 2).unwrap();

    // Then
    assert_eq!(ids(&board, Stage::Diligence), vec!["b", "c", "a"]);
    assert_eq!(board.deals(), &deals_before);
}

#[test]
fn given_out_of_range_index_when_moved_within_then_error_and_unchanged() {
    let mut board = board_with(&[(Stage::Diligence, &["a", "b"])]);
    let before = board.clone();

    let result = board.move_within_column(Stage::Diligence, 0, 2);

    assert!(matches!(
        result,
        Err(CoreError::IndexOutOfRange { index: 2, len: 2, .. })
    ));
    assert_eq!(board, before);
}

#[test]
fn given_two_columns_when_moved_across_then_id_changes_column() {
    // Given
    let mut board = board_with(&[
        (Stage::Inbox, &["a", "b"]),
        (Stage::Committed, &["c", "d", "e"]),
    ]);
    let deals_before = board.deals().clone();

    // When
    board
        .move_across_columns(Stage::Inbox, Stage::Committed, 0, 2, &DealId::from("a"))
        .unwrap();

    // Then
    assert_eq!(ids(&board, Stage::Inbox), vec!["b"]);
    assert_eq!(ids(&board, Stage::Committed), vec!["c", "d", "a", "e"]);
    assert_eq!(board.deals(), &deals_before);
    assert!(board.check_partition().is_ok());
}

#[test]
fn given_empty_destination_when_moved_across_to_index_zero_then_ok() {
    let mut board = board_with(&[(Stage::Inbox, &["a"])]);

    board
        .move_across_columns(Stage::Inbox, Stage::Passed, 0, 0, &DealId::from("a"))
        .unwrap();

    assert_eq!(ids(&board, Stage::Passed), vec!["a"]);
    assert_that!(ids(&board, Stage::Inbox), is_empty());
}

#[test]
fn given_destination_index_past_end_when_moved_across_then_error_and_unchanged() {
    let mut board = board_with(&[(Stage::Inbox, &["a"]), (Stage::Done, &["b"])]);
    let before = board.clone();

    let result = board.move_across_columns(Stage::Inbox, Stage::Done, 0, 2, &DealId::from("a"));

    assert!(matches!(result, Err(CoreError::IndexOutOfRange { .. })));
    assert_eq!(board, before);
}

#[test]
fn given_wrong_id_at_source_index_when_moved_across_then_mismatch() {
    let mut board = board_with(&[(Stage::Inbox, &["a", "b"])]);
    let before = board.clone();

    let result = board.move_across_columns(Stage::Inbox, Stage::Done, 0, 0, &DealId::from("b"));

    assert!(matches!(result, Err(CoreError::DealMismatch { .. })));
    assert_eq!(board, before);
}

// =========================================================================
// Partition check
// =========================================================================

#[test]
fn test_check_partition_reports_duplicate() {
    let mut board = Board::new();
    let a = deal("a", Stage::Inbox);
    board.replace(
        HashMap::from([
            (Stage::Inbox, vec![a.id.clone()]),
            (Stage::Done, vec![a.id.clone()]),
        ]),
        HashMap::from([(a.id.clone(), a)]),
    );

    assert_eq!(
        board.check_partition(),
        Err(PartitionViolation::Duplicate(DealId::from("a")))
    );
}

#[test]
fn test_check_partition_reports_dangling_and_orphaned() {
    let mut board = Board::new();
    board.replace(
        HashMap::from([(Stage::Inbox, vec![DealId::from("ghost")])]),
        HashMap::new(),
    );
    assert_eq!(
        board.check_partition(),
        Err(PartitionViolation::Dangling(DealId::from("ghost")))
    );

    let a = deal("a", Stage::Inbox);
    board.replace(HashMap::new(), HashMap::from([(a.id.clone(), a)]));
    assert_eq!(
        board.check_partition(),
        Err(PartitionViolation::Orphaned(DealId::from("a")))
    );
}
