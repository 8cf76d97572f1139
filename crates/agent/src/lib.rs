pub mod app;
pub mod cli;
pub mod config;
pub mod fetch;
pub mod logging;

pub use app::answer;
pub use cli::Cli;
pub use config::{AppConfig, ConfigError, OperationMode};
