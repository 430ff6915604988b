//! Drag/reorder controller.
//!
//! Drives one gesture at a time: `Idle -> Dragging -> Idle`. A drop mutates
//! the board synchronously, before any persistence is attempted, and hands
//! back the stage update for the caller to send.

use crate::{
    Board, CoreError, CoreResult, DealId, DragEnd, DragLocation, DropOutcome, StageUpdate,
};

use std::panic::Location;

use error_location::ErrorLocation;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        deal_id: DealId,
        source: DragLocation,
    },
}

#[derive(Debug, Default)]
pub struct DragController {
    phase: DragPhase,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn drag_start(&mut self, deal_id: DealId, source: DragLocation) {
        log::debug!("Drag start: {} from {}[{}]", deal_id, source.stage, source.index);
        self.phase = DragPhase::Dragging { deal_id, source };
    }

    /// Apply a drop to `board`. The controller returns to `Idle` whether or
    /// not the drop is accepted; a rejected drop leaves `board` unchanged.
    #[track_caller]
    pub fn drag_end(&mut self, board: &mut Board, event: &DragEnd) -> CoreResult<DropOutcome> {
        self.phase = DragPhase::Idle;

        let source = event.source;
        let Some(destination) = event.destination else {
            return Ok(DropOutcome::Cancelled);
        };

        if destination == source {
            return Ok(DropOutcome::Unchanged);
        }

        if !board.deals().contains_key(&event.deal_id) {
            return Err(CoreError::UnknownDeal {
                id: event.deal_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if destination.stage == source.stage {
            board.move_across_columns(
                source.stage,
                source.stage,
                source.index,
                destination.index,
                &event.deal_id,
            )?;
            return Ok(DropOutcome::Reordered {
                stage: source.stage,
                from_index: source.index,
                to_index: destination.index,
            });
        }

        board.move_across_columns(
            source.stage,
            destination.stage,
            source.index,
            destination.index,
            &event.deal_id,
        )?;

        Ok(DropOutcome::Moved {
            origin: source,
            update: StageUpdate {
                deal_id: event.deal_id.clone(),
                new_stage: destination.stage,
                new_order_index: destination.index,
            },
        })
    }

    /// Undo a cross-column move whose persistence failed.
    ///
    /// Only acts if the deal still sits in `update.new_stage`; if it has
    /// been dragged again since, the later move wins and nothing happens.
    /// Returns whether the deal was moved back.
    #[track_caller]
    pub fn revert(
        board: &mut Board,
        origin: DragLocation,
        update: &StageUpdate,
    ) -> CoreResult<bool> {
        let Some((stage, index)) = board.locate(&update.deal_id) else {
            return Ok(false);
        };
        if stage != update.new_stage {
            return Ok(false);
        }

        let to_index = origin.index.min(board.column(origin.stage).len());
        board.move_across_columns(stage, origin.stage, index, to_index, &update.deal_id)?;
        Ok(true)
    }
}
