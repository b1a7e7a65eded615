use super::errors::AgentError;

use rand::Rng;
use rand_distr::StandardNormal;

/// Current estimate of the mean reward of every action.
#[derive(Clone, Debug)]
pub(super) struct ActionValues {
    pub(super) estimates: Vec<f64>,
}

impl ActionValues {
    /// Start every estimate from an independent standard normal draw.
    pub(super) fn sample<R: Rng + ?Sized>(arms: usize, rng: &mut R) -> Self {
        Self {
            estimates: (0..arms).map(|_| rng.sample(StandardNormal)).collect(),
        }
    }

    pub(super) fn as_slice(&self) -> &[f64] {
        &self.estimates
    }

    /// Index of the highest estimate; ties go to the lowest index.
    pub(super) fn best(&self) -> usize {
        self.estimates
            .iter()
            .enumerate()
            .fold(0, |best, (action, &value)| {
                if value > self.estimates[best] || self.estimates[best].is_nan() {
                    action
                } else {
                    best
                }
            })
    }

    pub(super) fn check(&self, action: usize) -> Result<usize, AgentError> {
        if action < self.estimates.len() {
            Ok(action)
        } else {
            Err(AgentError::ActionOutOfRange {
                action,
                arms: self.estimates.len(),
            })
        }
    }

    /// Fold `reward` into the sample average of `action`.
    pub(super) fn update(&mut self, tracker: &mut ActionTracker, action: usize, reward: f64) {
        self.estimates[action] = tracker.record(action, reward);
    }
}

/// Pull counts and reward sums, scoped to a single play.
#[derive(Clone, Debug)]
pub(super) struct ActionTracker {
    pulls: Vec<u64>,
    rewards: Vec<f64>,
}

impl ActionTracker {
    pub(super) fn new(arms: usize) -> Self {
        Self {
            pulls: vec![0; arms],
            rewards: vec![0.0; arms],
        }
    }

    /// Returns the mean reward of `action` so far.
    fn record(&mut self, action: usize, reward: f64) -> f64 {
        self.pulls[action] += 1;
        self.rewards[action] += reward;
        self.rewards[action] / self.pulls[action] as f64
    }
}
