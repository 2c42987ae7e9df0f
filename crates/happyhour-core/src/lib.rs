pub mod app_config;
pub mod config;
pub mod output;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use output::{default_output_filename, write_json_records, OutputError};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
