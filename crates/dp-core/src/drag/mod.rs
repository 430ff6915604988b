pub mod drag_controller;
pub mod drag_event;
pub mod drop_outcome;
