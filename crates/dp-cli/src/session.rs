//! Pipeline session: the single owner of a board.
//!
//! Drops are applied to the board immediately and persisted afterwards. A
//! failed save is logged and surfaced through the notifier; whether the card
//! stays put or moves back is decided by the configured [`FailurePolicy`].
//! Any refetch replaces the whole board with the server's view.

use crate::notifier::{
    CREATE_FAILED_MESSAGE, DELETE_FAILED_MESSAGE, LOAD_FAILED_MESSAGE, SAVE_FAILED_MESSAGE,
};
use crate::{CliClientResult, DealGateway, Notice, Notifier};

use dp_config::FailurePolicy;
use dp_core::{
    Board, BoardSummary, Deal, DealId, DragController, DragEnd, DragLocation, DropOutcome,
    FilterCriteria, NewDeal, Stage, normalize, visible,
};

use futures::future::try_join_all;
use serde::Serialize;
use serde_json::Value;

/// What happened to the persistence half of a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Persistence {
    /// Nothing to send (cancelled, unchanged or same-column reorder)
    NotNeeded,
    Saved,
    Failed { rolled_back: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropReport {
    pub outcome: DropOutcome,
    pub persistence: Persistence,
}

pub struct PipelineSession<G, N> {
    gateway: G,
    notifier: N,
    failure_policy: FailurePolicy,
    board: Board,
    controller: DragController,
    loaded: bool,
}

impl<G: DealGateway, N: Notifier> PipelineSession<G, N> {
    pub fn new(gateway: G, notifier: N, failure_policy: FailurePolicy) -> Self {
        Self {
            gateway,
            notifier,
            failure_policy,
            board: Board::new(),
            controller: DragController::new(),
            loaded: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// False until the first successful fetch
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Fetch every deal and rebuild the board. On failure the board keeps its
    /// previous contents.
    pub async fn refresh(&mut self) -> CliClientResult<()> {
        match self.gateway.list_deals().await {
            Ok(raw) => {
                let normalized = normalize(raw);
                self.board.replace(normalized.columns, normalized.deals);
                self.loaded = true;
                Ok(())
            }
            Err(e) => {
                log::error!("Error fetching deals: {}", e);
                self.notifier.notify(Notice::error(LOAD_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    pub fn drag_start(&mut self, deal_id: DealId, source: DragLocation) {
        self.controller.drag_start(deal_id, source);
    }

    /// Optimistic half of a drop: mutate the board, send nothing
    pub fn apply_drop(&mut self, event: &DragEnd) -> CliClientResult<DropOutcome> {
        Ok(self.controller.drag_end(&mut self.board, event)?)
    }

    /// Persist a drop already applied with [`Self::apply_drop`]. Failures are
    /// handled here and never returned.
    pub async fn persist(&mut self, outcome: &DropOutcome) -> Persistence {
        let DropOutcome::Moved { origin, update } = outcome else {
            return Persistence::NotNeeded;
        };

        match self.gateway.update_stage(update).await {
            Ok(()) => {
                log::debug!("Saved {} -> {}", update.deal_id, update.new_stage);
                Persistence::Saved
            }
            Err(e) => {
                log::error!("Error updating stage for {}: {}", update.deal_id, e);
                self.notifier.notify(Notice::error(SAVE_FAILED_MESSAGE));

                let rolled_back = match self.failure_policy {
                    FailurePolicy::KeepOptimistic => false,
                    FailurePolicy::Rollback => {
                        match DragController::revert(&mut self.board, *origin, update) {
                            Ok(moved_back) => moved_back,
                            Err(e) => {
                                log::error!("Rollback of {} failed: {}", update.deal_id, e);
                                false
                            }
                        }
                    }
                };

                Persistence::Failed { rolled_back }
            }
        }
    }

    /// Apply a drop and persist it
    pub async fn handle_drag_end(&mut self, event: &DragEnd) -> CliClientResult<DropReport> {
        let outcome = self.apply_drop(event)?;
        let persistence = self.persist(&outcome).await;
        Ok(DropReport {
            outcome,
            persistence,
        })
    }

    pub fn visible(
        &self,
        stage: Stage,
        filters: &FilterCriteria,
        search_query: &str,
    ) -> Vec<&Deal> {
        visible(
            &self.board.column(stage).deal_ids,
            self.board.deals(),
            filters,
            search_query,
        )
    }

    pub fn summary(&self, filters: &FilterCriteria, search_query: &str) -> BoardSummary {
        BoardSummary::compute(&self.board, filters, search_query)
    }

    /// Create a deal, then refetch the whole board. Invalid amounts are
    /// rejected before anything is sent.
    pub async fn create_deal(&mut self, deal: &NewDeal) -> CliClientResult<Value> {
        deal.validate()?;

        let created = match self.gateway.create_deal(deal).await {
            Ok(created) => created,
            Err(e) => {
                log::error!("Error creating deal: {}", e);
                self.notifier.notify(Notice::error(CREATE_FAILED_MESSAGE));
                return Err(e);
            }
        };

        self.notifier.notify(Notice::success("Deal created"));
        self.refresh().await?;
        Ok(created)
    }

    /// Delete every deal in a column. Deletes run concurrently and the first
    /// failure fails the batch, leaving the board stale until the next
    /// refetch. Returns the number of deals deleted.
    pub async fn clear_column(&mut self, stage: Stage) -> CliClientResult<usize> {
        let ids = self.board.column(stage).deal_ids.clone();
        if ids.is_empty() {
            return Ok(0);
        }

        let gateway = &self.gateway;
        if let Err(e) = try_join_all(ids.iter().map(|id| gateway.delete_deal(id))).await {
            log::error!("Error deleting deals in {}: {}", stage, e);
            self.notifier.notify(Notice::error(DELETE_FAILED_MESSAGE));
            return Err(e);
        }

        self.notifier
            .notify(Notice::success(format!("Deleted {} deals", ids.len())));
        self.refresh().await?;
        Ok(ids.len())
    }
}
