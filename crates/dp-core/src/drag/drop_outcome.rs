use crate::{DragLocation, Stage, StageUpdate};

use serde::Serialize;

/// What a drop did to the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DropOutcome {
    /// Released outside any column
    Cancelled,
    /// Dropped back onto its own slot
    Unchanged,
    /// Reordered inside one column. Not persisted: the backend keeps no
    /// per-deal order.
    Reordered {
        stage: Stage,
        from_index: usize,
        to_index: usize,
    },
    /// Moved to another column; `update` still has to be persisted
    Moved {
        origin: DragLocation,
        update: StageUpdate,
    },
}

impl DropOutcome {
    /// Stage update to send, if any
    pub fn stage_update(&self) -> Option<&StageUpdate> {
        match self {
            Self::Moved { update, .. } => Some(update),
            _ => None,
        }
    }
}
