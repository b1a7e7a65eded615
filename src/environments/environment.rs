use super::bernoulli::BernoulliBandit;
use super::deterministic::DeterministicBandit;
use super::errors::EnvironmentError;
use super::gaussian::GaussianBandit;

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reward-generating game the agents play against.
///
/// `step` may be stochastic and may carry hidden state between calls; callers are expected to
/// build a fresh environment per trial.
pub trait Environment: fmt::Display {
    /// The legal actions, queried fresh every time it is needed.
    fn action_space(&self) -> Vec<usize>;

    /// Sample a reward for `action`, failing with `InvalidAction` outside the action space.
    fn step(&mut self, action: usize) -> Result<f64, EnvironmentError>;
}

fn default_std_dev() -> f64 {
    1.0
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EnvironmentType {
    Gaussian {
        arms: usize,
        #[serde(default = "default_std_dev")]
        std_dev: f64,
    },
    Bernoulli {
        probabilities: Vec<f64>,
    },
    Deterministic {
        rewards: Vec<f64>,
    },
}

impl EnvironmentType {
    pub fn build(&self, seed: Option<u64>) -> Result<Box<dyn Environment>, EnvironmentError> {
        let environment: Box<dyn Environment> = match self {
            EnvironmentType::Gaussian { arms, std_dev } => {
                Box::new(GaussianBandit::new(*arms, *std_dev, seed)?)
            }
            EnvironmentType::Bernoulli { probabilities } => {
                Box::new(BernoulliBandit::new(probabilities.clone(), seed)?)
            }
            EnvironmentType::Deterministic { rewards } => {
                Box::new(DeterministicBandit::new(rewards.clone())?)
            }
        };

        Ok(environment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_each_type() {
        let types = [
            EnvironmentType::Gaussian {
                arms: 4,
                std_dev: 1.0,
            },
            EnvironmentType::Bernoulli {
                probabilities: vec![0.1, 0.5, 0.9, 1.0],
            },
            EnvironmentType::Deterministic {
                rewards: vec![1.0, 2.0, 3.0, 4.0],
            },
        ];

        for environment_type in types {
            let environment = environment_type.build(Some(7)).unwrap();
            assert_eq!(environment.action_space(), vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn build_invalid() {
        let environment_type = EnvironmentType::Bernoulli {
            probabilities: vec![0.5, 1.5],
        };
        assert!(environment_type.build(None).is_err());
    }

    #[test]
    fn deserialize_tagged() {
        let environment_type: EnvironmentType =
            serde_json::from_str(r#"{"type": "gaussian", "arms": 10}"#).unwrap();
        assert_eq!(
            environment_type,
            EnvironmentType::Gaussian {
                arms: 10,
                std_dev: 1.0
            }
        );
    }
}
