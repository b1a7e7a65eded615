use crate::environments::errors::EnvironmentError;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AgentError {
    #[error("Invalid agent configuration: {0}")]
    Configuration(String),
    #[error("Environment has no actions to choose from")]
    EmptyActionSpace,
    #[error("Action {action} is outside the {arms} arms of the agent")]
    ActionOutOfRange { action: usize, arms: usize },
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
}
