use super::agent::{explore, log_play, Agent, AgentSettings, PlayTrace};
use super::errors::AgentError;
use super::values::{ActionTracker, ActionValues};
use crate::environments::Environment;
use crate::rng::MaybeSeededRng;

use rand::Rng;
use std::fmt;
use tracing::debug;

/// Explores uniformly with probability `epsilon`, otherwise exploits like `GreedyAgent`.
///
/// Exploratory turns update the value estimates exactly as greedy ones do.
#[derive(Clone, Debug)]
pub struct EpsilonGreedyAgent {
    settings: AgentSettings,
    epsilon: f64,
    values: ActionValues,
    rng: MaybeSeededRng,
}

impl EpsilonGreedyAgent {
    pub fn new(
        epsilon: f64,
        settings: AgentSettings,
        seed: Option<u64>,
    ) -> Result<Self, AgentError> {
        settings.validate()?;
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(AgentError::Configuration(format!(
                "epsilon must lie in [0, 1], got {epsilon}"
            )));
        }
        let mut rng = MaybeSeededRng::new(seed);
        let values = ActionValues::sample(settings.arms, rng.get_rng());

        Ok(Self {
            settings,
            epsilon,
            values,
            rng,
        })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn estimates(&self) -> &[f64] {
        self.values.as_slice()
    }

    fn run(&mut self, environment: &mut dyn Environment) -> Result<PlayTrace, AgentError> {
        let mut trace = PlayTrace::with_capacity(self.settings.turns);
        let mut tracker = ActionTracker::new(self.settings.arms);

        for _ in 0..self.settings.turns {
            let action = if self.rng.get_rng().random::<f64>() < self.epsilon {
                self.values.check(explore(environment, self.rng.get_rng())?)?
            } else {
                self.values.best()
            };
            let reward = environment.step(action)?;

            self.values.update(&mut tracker, action, reward);
            trace.record(action, reward, self.settings.recording);
        }

        Ok(trace)
    }
}

impl fmt::Display for EpsilonGreedyAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Epsilon-Greedy Agent ({})", self.epsilon)
    }
}

impl Agent for EpsilonGreedyAgent {
    fn settings(&self) -> &AgentSettings {
        &self.settings
    }

    fn play(&mut self, environment: &mut dyn Environment) -> Result<PlayTrace, AgentError> {
        debug!(
            agent = %self,
            environment = %environment,
            turns = self.settings.turns,
            "Starting play"
        );
        let result = self.run(environment);
        log_play(&*self, result)
    }

    fn action_values(&self) -> Option<&[f64]> {
        Some(self.values.as_slice())
    }
}
