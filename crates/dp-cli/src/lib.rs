//! dp-cli library
//!
//! Exports the pipeline API client, the board session and the logger for
//! use by the `dp` binary and tests.

pub mod logger;

pub(crate) mod client;
pub(crate) mod gateway;
pub(crate) mod notifier;
pub(crate) mod session;


pub use client::{CliClientResult, Client, ClientError};
pub use gateway::DealGateway;
pub use notifier::{LogNotifier, Notice, NoticeLevel, Notifier, SAVE_FAILED_MESSAGE};
pub use session::{DropReport, Persistence, PipelineSession};
