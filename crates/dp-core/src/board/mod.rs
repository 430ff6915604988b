pub mod board;
pub mod column;
pub mod normalizer;
pub mod summary;
