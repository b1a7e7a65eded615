mod bernoulli;
mod deterministic;
mod environment;
pub mod errors;
mod gaussian;

pub use bernoulli::BernoulliBandit;
pub use deterministic::DeterministicBandit;
pub use environment::{Environment, EnvironmentType};
pub use gaussian::GaussianBandit;
