//! Deal pipeline core: stage registry, deal view-models, board state,
//! filtering and the drag/reorder state machine.
//!
//! Nothing in this crate performs I/O. Persistence lives in `dp-cli`.

pub mod board;
pub mod currency;
pub mod drag;
pub mod error;
pub mod filter;
pub mod models;


pub use board::board::{Board, PartitionViolation};
pub use board::column::Column;
pub use board::normalizer::{NormalizedDeals, normalize};
pub use board::summary::{BoardSummary, ColumnSummary};
pub use currency::format_currency;
pub use drag::drag_controller::{DragController, DragPhase};
pub use drag::drag_event::{DragEnd, DragLocation};
pub use drag::drop_outcome::DropOutcome;
pub use error::{CoreError, Result as CoreResult};
pub use filter::engine::visible;
pub use filter::filter_criteria::FilterCriteria;
pub use filter::value_band::{HIGH_VALUE_THRESHOLD, ValueBand};
pub use filter::verification::Verification;
pub use models::deal::Deal;
pub use models::deal_id::DealId;
pub use models::new_deal::NewDeal;
pub use models::priority::Priority;
pub use models::raw_deal::{RawCompany, RawDeal, RawOwner};
pub use models::stage::Stage;
pub use models::stage_update::StageUpdate;
