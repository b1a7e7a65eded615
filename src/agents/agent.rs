use super::epsilon_greedy::EpsilonGreedyAgent;
use super::errors::AgentError;
use super::greedy::GreedyAgent;
use super::random::RandomAgent;
use crate::environments::Environment;

use rand::{seq::IndexedRandom, Rng};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// What the `rewards` sequence of a play trace holds.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RewardRecording {
    /// The reward returned by the environment.
    #[default]
    Observed,
    /// The chosen action index, as the legacy agents recorded it.
    ActionIndex,
}

#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct AgentSettings {
    pub arms: usize,
    pub turns: usize,
    pub recording: RewardRecording,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            arms: 10,
            turns: 1000,
            recording: RewardRecording::default(),
        }
    }
}

impl AgentSettings {
    pub fn new(arms: usize, turns: usize) -> Self {
        Self {
            arms,
            turns,
            ..Self::default()
        }
    }

    pub fn with_recording(mut self, recording: RewardRecording) -> Self {
        self.recording = recording;
        self
    }

    pub fn validate(&self) -> Result<(), AgentError> {
        if self.arms == 0 {
            return Err(AgentError::Configuration("arms must be positive".to_string()));
        }
        if self.turns == 0 {
            return Err(AgentError::Configuration("turns must be positive".to_string()));
        }
        Ok(())
    }
}

/// The actions taken and the values recorded over one play, in turn order.
#[derive(Clone, Debug, Default, Serialize, PartialEq)]
pub struct PlayTrace {
    pub actions: Vec<usize>,
    pub rewards: Vec<f64>,
    /// Rewards returned by the environment, whatever `rewards` records.
    pub observed: Vec<f64>,
}

impl PlayTrace {
    pub fn with_capacity(turns: usize) -> Self {
        Self {
            actions: Vec::with_capacity(turns),
            rewards: Vec::with_capacity(turns),
            observed: Vec::with_capacity(turns),
        }
    }

    pub fn record(&mut self, action: usize, reward: f64, recording: RewardRecording) {
        self.actions.push(action);
        self.rewards.push(match recording {
            RewardRecording::Observed => reward,
            RewardRecording::ActionIndex => action as f64,
        });
        self.observed.push(reward);
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn total_reward(&self) -> f64 {
        self.observed.iter().sum()
    }
}

/// An action-selection strategy that plays a fixed number of turns against an environment.
///
/// An agent is reused across plays. Learning agents keep their action-value table from one play
/// to the next, while pull counts and reward sums start from zero on every play.
pub trait Agent: fmt::Display {
    fn settings(&self) -> &AgentSettings;

    /// Play exactly `turns` turns, aborting on the first error.
    fn play(&mut self, environment: &mut dyn Environment) -> Result<PlayTrace, AgentError>;

    /// A snapshot of the current action-value estimates, for agents that learn them.
    fn action_values(&self) -> Option<&[f64]> {
        None
    }

    fn arms(&self) -> usize {
        self.settings().arms
    }

    fn turns(&self) -> usize {
        self.settings().turns
    }
}

/// Choose uniformly among the actions the environment currently advertises.
pub(super) fn explore<R: Rng + ?Sized>(
    environment: &dyn Environment,
    rng: &mut R,
) -> Result<usize, AgentError> {
    environment
        .action_space()
        .choose(rng)
        .copied()
        .ok_or(AgentError::EmptyActionSpace)
}

pub(super) fn log_play(
    agent: &dyn Agent,
    result: Result<PlayTrace, AgentError>,
) -> Result<PlayTrace, AgentError> {
    match &result {
        Ok(trace) => debug!(
            agent = %agent,
            turns = trace.len(),
            total_reward = trace.total_reward(),
            "Finished play"
        ),
        Err(err) => warn!(agent = %agent, error = %err, "Play aborted"),
    }
    result
}

fn default_epsilon() -> f64 {
    0.1
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AgentType {
    Random,
    Greedy,
    EpsilonGreedy {
        #[serde(default = "default_epsilon")]
        epsilon: f64,
    },
}

impl AgentType {
    pub fn build(
        &self,
        settings: AgentSettings,
        seed: Option<u64>,
    ) -> Result<Box<dyn Agent>, AgentError> {
        let agent: Box<dyn Agent> = match self {
            AgentType::Random => Box::new(RandomAgent::new(settings, seed)?),
            AgentType::Greedy => Box::new(GreedyAgent::new(settings, seed)?),
            AgentType::EpsilonGreedy { epsilon } => {
                Box::new(EpsilonGreedyAgent::new(*epsilon, settings, seed)?)
            }
        };

        Ok(agent)
    }
}
