use super::agent::{explore, log_play, Agent, AgentSettings, PlayTrace};
use super::errors::AgentError;
use crate::environments::Environment;
use crate::rng::MaybeSeededRng;

use std::fmt;
use tracing::debug;

/// Picks uniformly among the environment's actions every turn and never learns.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    settings: AgentSettings,
    rng: MaybeSeededRng,
}

impl RandomAgent {
    pub fn new(settings: AgentSettings, seed: Option<u64>) -> Result<Self, AgentError> {
        settings.validate()?;

        Ok(Self {
            settings,
            rng: MaybeSeededRng::new(seed),
        })
    }

    fn run(&mut self, environment: &mut dyn Environment) -> Result<PlayTrace, AgentError> {
        let mut trace = PlayTrace::with_capacity(self.settings.turns);

        for _ in 0..self.settings.turns {
            let action = explore(environment, self.rng.get_rng())?;
            let reward = environment.step(action)?;

            trace.record(action, reward, self.settings.recording);
        }

        Ok(trace)
    }
}

impl fmt::Display for RandomAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Random Agent")
    }
}

impl Agent for RandomAgent {
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
}
