use crate::agents::{AgentSettings, AgentType, PlayTrace};
use crate::config::AppConfig;
use crate::environments::EnvironmentType;
use crate::errors::SimulationError;
use crate::rng::MaybeSeededRng;

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AgentReport {
    pub label: String,
    pub mean_reward: f64,
    /// Observed reward at each turn, averaged over trials.
    pub average_rewards: Vec<f64>,
    pub action_counts: BTreeMap<usize, u64>,
}

impl AgentReport {
    fn new(label: String, turns: usize) -> Self {
        Self {
            label,
            mean_reward: 0.0,
            average_rewards: vec![0.0; turns],
            action_counts: BTreeMap::new(),
        }
    }

    fn add(&mut self, trace: &PlayTrace) {
        self.average_rewards
            .iter_mut()
            .zip(&trace.observed)
            .for_each(|(total, reward)| *total += reward);
        trace
            .actions
            .iter()
            .for_each(|&action| *self.action_counts.entry(action).or_default() += 1);
    }

    fn finish(mut self, trials: usize) -> Self {
        self.average_rewards
            .iter_mut()
            .for_each(|total| *total /= trials as f64);
        self.mean_reward =
            self.average_rewards.iter().sum::<f64>() / self.average_rewards.len() as f64;
        self
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SimulationReport {
    pub trials: usize,
    pub turns: usize,
    pub environment: String,
    pub agents: Vec<AgentReport>,
}

/// Plays every configured agent against freshly built environments over a number of trials.
///
/// Trial `i` uses the same environment seed for every agent so that agents face identical games.
pub struct Simulation {
    trials: usize,
    settings: AgentSettings,
    environment: EnvironmentType,
    agents: Vec<AgentType>,
    rng: MaybeSeededRng,
}

impl Simulation {
    pub fn new(config: &AppConfig) -> Result<Self, SimulationError> {
        if config.simulation.trials == 0 {
            return Err(SimulationError::Configuration("trials must be positive".to_string()));
        }
        config.agent.validate()?;

        let arms = config.environment.build(Some(0))?.action_space().len();
        if arms != config.agent.arms {
            return Err(SimulationError::Configuration(format!(
                "agents expect {} arms but the environment has {arms}",
                config.agent.arms
            )));
        }

        Ok(Self {
            trials: config.simulation.trials,
            settings: config.agent,
            environment: config.environment.clone(),
            agents: config.agents.clone(),
            rng: MaybeSeededRng::new(config.simulation.seed),
        })
    }

    pub fn run(&mut self) -> Result<SimulationReport, SimulationError> {
        let environment_seeds: Vec<u64> =
            (0..self.trials).map(|_| self.rng.next_seed()).collect();
        let label = self
            .environment
            .build(environment_seeds.first().copied())?
            .to_string();
        info!(
            trials = self.trials,
            turns = self.settings.turns,
            seed = ?self.rng.seed(),
            environment = %label,
            "Starting simulation"
        );

        let mut reports = Vec::with_capacity(self.agents.len());
        for agent_type in &self.agents {
            let mut report: Option<AgentReport> = None;

            for &seed in &environment_seeds {
                let mut environment = self.environment.build(Some(seed))?;
                let mut agent = agent_type.build(self.settings, Some(self.rng.next_seed()))?;
                let trace = agent.play(environment.as_mut())?;

                report
                    .get_or_insert_with(|| AgentReport::new(agent.to_string(), self.settings.turns))
                    .add(&trace);
            }

            if let Some(report) = report.map(|report| report.finish(self.trials)) {
                info!(agent = %report.label, mean_reward = report.mean_reward, "Finished agent");
                reports.push(report);
            }
        }

        Ok(SimulationReport {
            trials: self.trials,
            turns: self.settings.turns,
            environment: label,
            agents: reports,
        })
    }
}
