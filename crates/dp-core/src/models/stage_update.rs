use crate::{DealId, Stage};

use serde::Serialize;

/// Stage change issued after a cross-column drop. Serializes to the
/// update-stage request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageUpdate {
    pub deal_id: DealId,
    pub new_stage: Stage,
    pub new_order_index: usize,
}
