pub mod deal;
pub mod deal_id;
pub mod new_deal;
pub mod priority;
pub mod raw_deal;
pub mod stage;
pub mod stage_update;
