pub mod app_config;
pub mod lead;
pub mod oauth;

pub use app_config::{AppConfig, AppState, ConfigError};
