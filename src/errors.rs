use crate::agents::errors::AgentError;
use crate::environments::errors::EnvironmentError;

use config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Invalid simulation configuration: {0}")]
    Configuration(String),
    #[error("Cannot read config: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Agent(#[from] AgentError),
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
