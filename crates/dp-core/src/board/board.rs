//! Board state store.
//!
//! Holds the ordered id list of every column plus the deal lookup map. All
//! mutation goes through [`Board::replace`] and the two move operations, which
//! keep every deal id in exactly one column.

use crate::{Column, CoreError, CoreResult, Deal, DealId, Stage};

use std::collections::{BTreeSet, HashMap, HashSet};
use std::panic::Location;

use error_location::ErrorLocation;

/// A breach of the one-column-per-deal rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionViolation {
    /// Id listed in more than one slot
    Duplicate(DealId),
    /// Deal in the map but in no column
    Orphaned(DealId),
    /// Id in a column with no deal in the map
    Dangling(DealId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Indexed by `Stage::position`
    columns: Vec<Column>,
    deals: HashMap<DealId, Deal>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board with every stage present
    pub fn new() -> Self {
        Self {
            columns: Stage::ALL.iter().copied().map(Column::empty).collect(),
            deals: HashMap::new(),
        }
    }

    /// Left-to-right column order. Fixed at compile time.
    pub fn column_order(&self) -> &'static [Stage] {
        &Stage::ALL
    }

    /// Atomic full overwrite. Stages absent from `columns` become empty.
    pub fn replace(
        &mut self,
        mut columns: HashMap<Stage, Vec<DealId>>,
        deals: HashMap<DealId, Deal>,
    ) {
        self.columns = Stage::ALL
            .iter()
            .map(|stage| Column {
                id: *stage,
                title: stage.title(),
                deal_ids: columns.remove(stage).unwrap_or_default(),
            })
            .collect();
        self.deals = deals;

        log::info!(
            "Board replaced: {} deals across {} columns",
            self.deals.len(),
            self.columns.len()
        );
    }

    pub fn column(&self, stage: Stage) -> &Column {
        &self.columns[stage.position()]
    }

    /// Columns in display order
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    pub fn deals(&self) -> &HashMap<DealId, Deal> {
        &self.deals
    }

    pub fn deal(&self, id: &DealId) -> Option<&Deal> {
        self.deals.get(id)
    }

    /// Total ids across all columns
    pub fn len(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Column and index currently holding `id`
    pub fn locate(&self, id: &DealId) -> Option<(Stage, usize)> {
        self.columns
            .iter()
            .find_map(|column| column.position_of(id).map(|index| (column.id, index)))
    }

    /// Sorted, de-duplicated industries across all deals
    pub fn sectors(&self) -> Vec<String> {
        self.deals
            .values()
            .flat_map(|deal| deal.industry.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Remove the id at `from_index` and reinsert it at `to_index` in the same
    /// column. The deal map is untouched.
    #[track_caller]
    pub fn move_within_column(
        &mut self,
        stage: Stage,
        from_index: usize,
        to_index: usize,
    ) -> CoreResult<()> {
        let column = &mut self.columns[stage.position()];
        let len = column.len();

        for index in [from_index, to_index] {
            if index >= len {
                return Err(CoreError::IndexOutOfRange {
                    stage: stage.to_string(),
                    index,
                    len,
                    location: ErrorLocation::from(Location::caller()),
                });
            }
        }

        let id = column.deal_ids.remove(from_index);
        column.deal_ids.insert(to_index, id);
        Ok(())
    }

    /// Remove `deal_id` from `from_stage` at `from_index` and insert it into
    /// `to_stage` at `to_index`. Both positions are checked before anything
    /// moves, so a rejected call leaves the board unchanged.
    #[track_caller]
    pub fn move_across_columns(
        &mut self,
        from_stage: Stage,
        to_stage: Stage,
        from_index: usize,
        to_index: usize,
        deal_id: &DealId,
    ) -> CoreResult<()> {
        let source = self.column(from_stage);
        let Some(found) = source.deal_ids.get(from_index) else {
            return Err(CoreError::IndexOutOfRange {
                stage: from_stage.to_string(),
                index: from_index,
                len: source.len(),
                location: ErrorLocation::from(Location::caller()),
            });
        };
        if found != deal_id {
            return Err(CoreError::DealMismatch {
                stage: from_stage.to_string(),
                index: from_index,
                expected: deal_id.to_string(),
                found: found.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if from_stage == to_stage {
            return self.move_within_column(from_stage, from_index, to_index);
        }

        let destination_len = self.column(to_stage).len();
        if to_index > destination_len {
            return Err(CoreError::IndexOutOfRange {
                stage: to_stage.to_string(),
                index: to_index,
                len: destination_len,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let id = self.columns[from_stage.position()]
            .deal_ids
            .remove(from_index);
        self.columns[to_stage.position()].deal_ids.insert(to_index, id);
        Ok(())
    }

    /// Check that every deal sits in exactly one column and every listed id
    /// resolves to a deal.
    pub fn check_partition(&self) -> Result<(), PartitionViolation> {
        let mut seen = HashSet::with_capacity(self.deals.len());

        for id in self.columns.iter().flat_map(|c| c.deal_ids.iter()) {
            if !seen.insert(id) {
                return Err(PartitionViolation::Duplicate(id.clone()));
            }
            if !self.deals.contains_key(id) {
                return Err(PartitionViolation::Dangling(id.clone()));
            }
        }

        match self.deals.keys().find(|id| !seen.contains(id)) {
            Some(id) => Err(PartitionViolation::Orphaned(id.clone())),
            None => Ok(()),
        }
    }
}
