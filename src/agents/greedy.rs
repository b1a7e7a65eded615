use super::agent::{log_play, Agent, AgentSettings, PlayTrace};
use super::errors::AgentError;
use super::values::{ActionTracker, ActionValues};
use crate::environments::Environment;
use crate::rng::MaybeSeededRng;

use std::fmt;
use tracing::debug;

/// Always exploits the action with the highest estimated value.
#[derive(Clone, Debug)]
pub struct GreedyAgent {
    settings: AgentSettings,
    values: ActionValues,
}

impl GreedyAgent {
    pub fn new(settings: AgentSettings, seed: Option<u64>) -> Result<Self, AgentError> {
        settings.validate()?;
        let mut rng = MaybeSeededRng::new(seed);

        Ok(Self {
            settings,
            values: ActionValues::sample(settings.arms, rng.get_rng()),
        })
    }

    pub fn estimates(&self) -> &[f64] {
        self.values.as_slice()
    }

    fn run(&mut self, environment: &mut dyn Environment) -> Result<PlayTrace, AgentError> {
        let mut trace = PlayTrace::with_capacity(self.settings.turns);
        let mut tracker = ActionTracker::new(self.settings.arms);

        for _ in 0..self.settings.turns {
            let action = self.values.best();
            let reward = environment.step(action)?;

            self.values.update(&mut tracker, action, reward);
            trace.record(action, reward, self.settings.recording);
        }

        Ok(trace)
    }
}

impl fmt::Display for GreedyAgent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Greedy Agent")
    }
}

impl Agent for GreedyAgent {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RewardRecording;
    use crate::environments::errors::EnvironmentError;
    use crate::environments::{DeterministicBandit, GaussianBandit};

    const SEED: u64 = 1234;

    #[test]
    fn create() {
        let agent = GreedyAgent::new(AgentSettings::default(), Some(SEED)).unwrap();
        assert_eq!(agent.estimates().len(), 10);
        assert_eq!(agent.arms(), 10);
        assert_eq!(agent.turns(), 1000);
    }

    #[test]
    fn create_invalid() {
        assert!(GreedyAgent::new(AgentSettings::new(0, 10), None).is_err());
        assert!(GreedyAgent::new(AgentSettings::new(10, 0), None).is_err());
    }

    #[test]
    fn play_favoring_best_arm() {
        let mut agent = GreedyAgent::new(AgentSettings::new(2, 5), Some(SEED)).unwrap();
        agent.values.estimates[0] = agent.values.estimates[1].abs() + 1.0;
        let untouched = agent.values.estimates[1];
        let mut environment = DeterministicBandit::new(vec![10.0, -10.0]).unwrap();

        let trace = agent.play(&mut environment).unwrap();
        assert_eq!(trace.actions, vec![0; 5]);
        assert_eq!(trace.rewards, vec![10.0; 5]);
        assert_eq!(agent.estimates(), &[10.0, untouched]);
    }

    #[test]
    fn play_favoring_worst_arm() {
        let mut agent = GreedyAgent::new(AgentSettings::new(2, 5), Some(SEED)).unwrap();
        agent.values.estimates = vec![0.0, 1.0];
        let mut environment = DeterministicBandit::new(vec![10.0, -10.0]).unwrap();

        let trace = agent.play(&mut environment).unwrap();
        assert_eq!(trace.actions, vec![1, 0, 0, 0, 0]);
        assert_eq!(agent.estimates(), &[10.0, -10.0]);
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let mut agent = GreedyAgent::new(AgentSettings::new(4, 1), Some(SEED)).unwrap();
        agent.values.estimates = vec![0.5, 2.0, 2.0, 1.0];
        let mut environment = DeterministicBandit::new(vec![0.0; 4]).unwrap();

        let trace = agent.play(&mut environment).unwrap();
        assert_eq!(trace.actions, vec![1]);
    }

    #[test]
    fn estimates_are_sample_averages() {
        let mut agent = GreedyAgent::new(AgentSettings::new(5, 500), Some(SEED)).unwrap();
        let initial = agent.estimates().to_vec();
        let mut environment = GaussianBandit::new(5, 1.0, Some(SEED)).unwrap();

        let trace = agent.play(&mut environment).unwrap();
        assert_eq!(trace.len(), 500);
        assert!(trace.actions.iter().all(|&action| action < 5));

        for action in 0..5 {
            let rewards: Vec<f64> = trace
                .actions
                .iter()
                .zip(&trace.rewards)
                .filter(|(&a, _)| a == action)
                .map(|(_, &reward)| reward)
                .collect();
            let estimate = agent.estimates()[action];

            if rewards.is_empty() {
                assert_eq!(estimate, initial[action]);
            } else {
                let mean = rewards.iter().sum::<f64>() / rewards.len() as f64;
                assert!((estimate - mean).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn counters_reset_between_plays() {
        let mut agent = GreedyAgent::new(AgentSettings::new(2, 3), Some(SEED)).unwrap();
        agent.values.estimates = vec![1.0, 0.0];
        let mut first = DeterministicBandit::new(vec![4.0, -1.0]).unwrap();
        let mut second = DeterministicBandit::new(vec![2.0, -1.0]).unwrap();

        agent.play(&mut first).unwrap();
        assert_eq!(agent.estimates(), &[4.0, 0.0]);

        // the second play averages only its own rewards
        agent.play(&mut second).unwrap();
        assert_eq!(agent.estimates(), &[2.0, 0.0]);
    }

    #[test]
    fn records_action_index() {
        let settings = AgentSettings::new(2, 4).with_recording(RewardRecording::ActionIndex);
        let mut agent = GreedyAgent::new(settings, Some(SEED)).unwrap();
        agent.values.estimates = vec![0.0, 1.0];
        let mut environment = DeterministicBandit::new(vec![-3.0, 7.0]).unwrap();

        let trace = agent.play(&mut environment).unwrap();
        assert_eq!(trace.actions, vec![1; 4]);
        assert_eq!(trace.rewards, vec![1.0; 4]);
        // learning still uses the observed reward
        assert_eq!(agent.estimates(), &[0.0, 7.0]);
    }

    #[test]
    fn invalid_action_aborts_play() {
        let mut agent = GreedyAgent::new(AgentSettings::new(3, 10), Some(SEED)).unwrap();
        agent.values.estimates = vec![0.0, 0.0, 1.0];
        let mut environment = DeterministicBandit::new(vec![1.0, 1.0]).unwrap();

        assert_eq!(
            agent.play(&mut environment),
            Err(AgentError::Environment(EnvironmentError::InvalidAction {
                action: 2,
                arms: 2
            }))
        );
    }

    #[test]
    fn trait_view_matches_estimates() {
        let agent = GreedyAgent::new(AgentSettings::new(4, 10), Some(SEED)).unwrap();
        let dynamic: &dyn Agent = &agent;
        assert_eq!(dynamic.action_values(), Some(agent.estimates()));
    }
}
