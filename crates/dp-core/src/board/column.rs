use crate::{DealId, Stage};

use serde::Serialize;

/// One Kanban column: a stage and the ordered ids of the cards in it.
/// A card's order index is its position in `deal_ids`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: Stage,
    pub title: &'static str,
    pub deal_ids: Vec<DealId>,
}

impl Column {
    pub fn empty(stage: Stage) -> Self {
        Self {
            id: stage,
            title: stage.title(),
            deal_ids: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.deal_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deal_ids.is_empty()
    }

    pub fn position_of(&self, deal_id: &DealId) -> Option<usize> {
        self.deal_ids.iter().position(|id| id == deal_id)
    }
}
