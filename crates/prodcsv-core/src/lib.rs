pub mod app_config;
pub mod config;
pub mod lang;
pub mod record;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use lang::Lang;
pub use record::{ProductRecord, FIELD_NAMES};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unsupported language \"{0}\" (expected one of: es-CR, en-CR)")]
    UnknownLang(String),
}
