use crate::tests::{board_with, ids};
use crate::{
    CoreError, DealId, DragController, DragEnd, DragLocation, DragPhase, DropOutcome, Stage,
    StageUpdate,
};

fn gesture(deal_id: &str, from: (Stage, usize), to: Option<(Stage, usize)>) -> DragEnd {
    DragEnd {
        deal_id: DealId::from(deal_id),
        source: DragLocation::new(from.0, from.1),
        destination: to.map(|(stage, index)| DragLocation::new(stage, index)),
    }
}

#[test]
fn given_drag_started_then_phase_is_dragging_until_drop() {
    let mut board = board_with(&[(Stage::Inbox, &["a"])]);
    let mut controller = DragController::new();
    assert_eq!(controller.phase(), &DragPhase::Idle);

    controller.drag_start(DealId::from("a"), DragLocation::new(Stage::Inbox, 0));
    assert!(matches!(controller.phase(), DragPhase::Dragging { .. }));

    controller
        .drag_end(&mut board, &gesture("a", (Stage::Inbox, 0), None))
        .unwrap();
    assert_eq!(controller.phase(), &DragPhase::Idle);
}

#[test]
fn given_no_destination_then_cancelled_and_board_unchanged() {
    let mut board = board_with(&[(Stage::Inbox, &["a", "b"])]);
    let before = board.clone();

    let outcome = DragController::new()
        .drag_end(&mut board, &gesture("a", (Stage::Inbox, 0), None))
        .unwrap();

    assert_eq!(outcome, DropOutcome::Cancelled);
    assert_eq!(board, before);
}

#[test]
fn given_same_slot_then_unchanged() {
    let mut board = board_with(&[(Stage::Inbox, &["a", "b"])]);
    let before = board.clone();

    let outcome = DragController::new()
        .drag_end(&mut board, &gesture("b", (Stage::Inbox, 1), Some((Stage::Inbox, 1))))
        .unwrap();

    assert_eq!(outcome, DropOutcome::Unchanged);
    assert_eq!(board, before);
}

#[test]
fn given_same_column_new_index_then_reordered_without_stage_update() {
    let mut board = board_with(&[(Stage::Diligence, &["a", "b", "c"])]);

    let outcome = DragController::new()
        .drag_end(
            &mut board,
            &gesture("c", (Stage::Diligence, 2), Some((Stage::Diligence, 0))),
        )
        .unwrap();

    assert_eq!(
        outcome,
        DropOutcome::Reordered {
            stage: Stage::Diligence,
            from_index: 2,
            to_index: 0
        }
    );
    assert!(outcome.stage_update().is_none());
    assert_eq!(ids(&board, Stage::Diligence), vec!["c", "a", "b"]);
}

#[test]
fn given_inbox_to_committed_then_moved_and_stage_update_issued() {
    // Given
    let mut board = board_with(&[
        (Stage::Inbox, &["a", "b"]),
        (Stage::Committed, &["c", "d", "e"]),
    ]);
    let deals_before = board.deals().clone();

    // When
    let outcome = DragController::new()
        .drag_end(
            &mut board,
            &gesture("a", (Stage::Inbox, 0), Some((Stage::Committed, 2))),
        )
        .unwrap();

    // Then
    assert_eq!(ids(&board, Stage::Inbox), vec!["b"]);
    assert_eq!(ids(&board, Stage::Committed), vec!["c", "d", "a", "e"]);
    assert_eq!(board.deals(), &deals_before);
    assert_eq!(
        outcome.stage_update(),
        Some(&StageUpdate {
            deal_id: DealId::from("a"),
            new_stage: Stage::Committed,
            new_order_index: 2,
        })
    );
}

#[test]
fn given_unknown_deal_then_error_and_board_unchanged() {
    let mut board = board_with(&[(Stage::Inbox, &["a"])]);
    let before = board.clone();

    let result = DragController::new().drag_end(
        &mut board,
        &gesture("ghost", (Stage::Inbox, 0), Some((Stage::Done, 0))),
    );

    assert!(matches!(result, Err(CoreError::UnknownDeal { .. })));
    assert_eq!(board, before);
}

#[test]
fn given_failed_move_when_reverted_then_back_at_origin() {
    let mut board = board_with(&[(Stage::Inbox, &["a", "b"]), (Stage::Done, &["c"])]);
    let before = board.clone();
    let outcome = DragController::new()
        .drag_end(&mut board, &gesture("a", (Stage::Inbox, 0), Some((Stage::Done, 1))))
        .unwrap();
    let DropOutcome::Moved { origin, update } = outcome else {
        panic!("expected a cross-column move");
    };

    let reverted = DragController::revert(&mut board, origin, &update).unwrap();

    assert!(reverted);
    assert_eq!(board, before);
}

#[test]
fn given_card_moved_again_when_reverted_then_later_move_wins() {
    let mut board = board_with(&[(Stage::Inbox, &["a"]), (Stage::Done, &[])]);
    let mut controller = DragController::new();
    let first = controller
        .drag_end(&mut board, &gesture("a", (Stage::Inbox, 0), Some((Stage::Done, 0))))
        .unwrap();
    controller
        .drag_end(&mut board, &gesture("a", (Stage::Done, 0), Some((Stage::Passed, 0))))
        .unwrap();
    let DropOutcome::Moved { origin, update } = first else {
        panic!("expected a cross-column move");
    };

    let reverted = DragController::revert(&mut board, origin, &update).unwrap();

    assert!(!reverted);
    assert_eq!(ids(&board, Stage::Passed), vec!["a"]);
}
