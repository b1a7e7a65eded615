use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum EnvironmentError {
    #[error("Action {action} is outside the action space of {arms} arms")]
    InvalidAction { action: usize, arms: usize },
    #[error("Invalid environment configuration: {0}")]
    Configuration(String),
}
