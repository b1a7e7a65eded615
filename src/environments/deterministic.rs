use super::environment::Environment;
use super::errors::EnvironmentError;

use std::fmt;

/// Every arm always pays the same reward.
#[derive(Clone, Debug)]
pub struct DeterministicBandit {
    rewards: Vec<f64>,
}

impl DeterministicBandit {
    pub fn new(rewards: Vec<f64>) -> Result<Self, EnvironmentError> {
        if rewards.is_empty() {
            return Err(EnvironmentError::Configuration(
                "a deterministic bandit needs at least one arm".to_string(),
            ));
        }

        Ok(Self { rewards })
    }
}

impl fmt::Display for DeterministicBandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DeterministicBandit({:?})", self.rewards)
    }
}

impl Environment for DeterministicBandit {
    fn action_space(&self) -> Vec<usize> {
        (0..self.rewards.len()).collect()
    }

    fn step(&mut self, action: usize) -> Result<f64, EnvironmentError> {
        self.rewards
            .get(action)
            .copied()
            .ok_or(EnvironmentError::InvalidAction {
                action,
                arms: self.rewards.len(),
            })
    }
}
