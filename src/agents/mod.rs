mod agent;
mod epsilon_greedy;
pub mod errors;
mod greedy;
mod random;
mod values;

pub use agent::{Agent, AgentSettings, AgentType, PlayTrace, RewardRecording};
pub use epsilon_greedy::EpsilonGreedyAgent;
pub use greedy::GreedyAgent;
pub use random::RandomAgent;
