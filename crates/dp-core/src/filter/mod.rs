pub mod engine;
pub mod filter_criteria;
pub mod value_band;
pub mod verification;
