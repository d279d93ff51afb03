//! CLI error handling

use thiserror::Error;

use core_kernel::CoreError;
use domain_retirement::RetirementError;
use domain_service_time::ServiceError;

/// Errors raised while loading or running a scenario
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Cannot read scenario {path}: {source}")]
    ScenarioIo {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid scenario: {0}")]
    ScenarioFormat(#[from] serde_json::Error),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Retirement(#[from] RetirementError),
}
