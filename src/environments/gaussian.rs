use super::environment::Environment;
use super::errors::EnvironmentError;
use crate::rng::MaybeSeededRng;

use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal};
use std::cmp::Ordering;
use std::fmt;

/// The k-armed testbed: each arm pays its true mean plus gaussian noise.
#[derive(Clone, Debug)]
pub struct GaussianBandit {
    means: Vec<f64>,
    noise: Normal<f64>,
    rng: MaybeSeededRng,
}

impl GaussianBandit {
    /// Draw the true mean of every arm from a standard normal distribution.
    pub fn new(arms: usize, std_dev: f64, seed: Option<u64>) -> Result<Self, EnvironmentError> {
        let mut rng = MaybeSeededRng::new(seed);
        let means = (0..arms)
            .map(|_| rng.get_rng().sample(StandardNormal))
            .collect();

        Self::build(means, std_dev, rng)
    }

    pub fn with_means(
        means: Vec<f64>,
        std_dev: f64,
        seed: Option<u64>,
    ) -> Result<Self, EnvironmentError> {
        Self::build(means, std_dev, MaybeSeededRng::new(seed))
    }

    fn build(
        means: Vec<f64>,
        std_dev: f64,
        rng: MaybeSeededRng,
    ) -> Result<Self, EnvironmentError> {
        if means.is_empty() {
            return Err(EnvironmentError::Configuration(
                "a gaussian bandit needs at least one arm".to_string(),
            ));
        }
        if std_dev.is_nan() || std_dev < 0.0 {
            return Err(EnvironmentError::Configuration(format!(
                "std_dev must be non-negative, got {std_dev}"
            )));
        }
        let noise = Normal::new(0.0, std_dev)
            .map_err(|e| EnvironmentError::Configuration(e.to_string()))?;

        Ok(Self { means, noise, rng })
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// The arm with the highest true mean.
    pub fn optimal_action(&self) -> usize {
        self.means
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
            .map(|(arm, _)| arm)
            .unwrap_or_default()
    }
}

impl fmt::Display for GaussianBandit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "GaussianBandit({} arms, std_dev={})",
            self.means.len(),
            self.noise.std_dev()
        )
    }
}

impl Environment for GaussianBandit {
    fn action_space(&self) -> Vec<usize> {
        (0..self.means.len()).collect()
    }

    fn step(&mut self, action: usize) -> Result<f64, EnvironmentError> {
        let mean = self
            .means
            .get(action)
            .ok_or(EnvironmentError::InvalidAction {
                action,
                arms: self.means.len(),
            })?;

        Ok(mean + self.noise.sample(self.rng.get_rng()))
    }
}
