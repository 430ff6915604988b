mod api_config;
mod board_config;
mod config;
mod error;
mod log_level;
mod logging_config;


pub use api_config::ApiConfig;
pub use board_config::{BoardConfig, FailurePolicy};
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

const CONFIG_DIR_ENV: &str = "DP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR_NAME: &str = ".dp";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
