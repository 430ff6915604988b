use crate::{DealId, Stage};

use serde::{Deserialize, Serialize};

/// A slot on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragLocation {
    pub stage: Stage,
    pub index: usize,
}

impl DragLocation {
    pub fn new(stage: Stage, index: usize) -> Self {
        Self { stage, index }
    }
}

/// End of a drag gesture. `destination` is `None` when the card was
/// released outside every column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub deal_id: DealId,
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}
