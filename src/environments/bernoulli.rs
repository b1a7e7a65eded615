use super::environment::Environment;
use super::errors::EnvironmentError;
use crate::rng::MaybeSeededRng;

use rand_distr::{Bernoulli, Distribution};
use std::fmt;

/// A multi-armed bandit whose arms pay 1.0 with a fixed probability and 0.0 otherwise.
#[derive(Clone, Debug)]
pub struct BernoulliBandit {
    probabilities: Vec<f64>,
    arms: Vec<Bernoulli>,
    rng: MaybeSeededRng,
}

impl BernoulliBandit {
    pub fn new(probabilities: Vec<f64>, seed: Option<u64>) -> Result<Self, EnvironmentError> {
        if probabilities.is_empty() {
            return Err(EnvironmentError::Configuration(
                "a bernoulli bandit needs at least one arm".to_string(),
            ));
        }
        let arms = probabilities
            .iter()
            .map(|&p| {
                Bernoulli::new(p)
                    .map_err(|e| EnvironmentError::Configuration(format!("probability {p}: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            probabilities,
            arms,
            rng: MaybeSeededRng::new(seed),
        })
    }
}

impl fmt::Display for BernoulliBandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BernoulliBandit({:?})", self.probabilities)
    }
}

impl Environment for BernoulliBandit {
    fn action_space(&self) -> Vec<usize> {
        (0..self.arms.len()).collect()
    }

    fn step(&mut self, action: usize) -> Result<f64, EnvironmentError> {
        let arm = self
            .arms
            .get(action)
            .ok_or(EnvironmentError::InvalidAction {
                action,
                arms: self.arms.len(),
            })?;

        Ok(arm.sample(self.rng.get_rng()) as u8 as f64)
    }
}
