//! Persistence gateway seam between the session and the deal-storage API.

use crate::CliClientResult;

use dp_core::{DealId, NewDeal, RawDeal, StageUpdate};

use async_trait::async_trait;
use serde_json::Value;

/// Deal storage operations. Each call is an independent request with no
/// batching or transactions.
#[async_trait]
pub trait DealGateway: Send + Sync {
    /// All deals, in server order
    async fn list_deals(&self) -> CliClientResult<Vec<RawDeal>>;

    /// Record a deal's new stage and its index in the destination column
    async fn update_stage(&self, update: &StageUpdate) -> CliClientResult<()>;

    /// Create a deal and return the server's record
    async fn create_deal(&self, deal: &NewDeal) -> CliClientResult<Value>;

    async fn delete_deal(&self, id: &DealId) -> CliClientResult<()>;
}
