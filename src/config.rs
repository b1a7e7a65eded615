use crate::agents::{AgentSettings, AgentType};
use crate::environments::EnvironmentType;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_trials() -> usize {
    100
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SimulationConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_trials")]
    pub trials: usize,
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            trials: default_trials(),
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub agent: AgentSettings,
    pub environment: EnvironmentType,
    pub agents: Vec<AgentType>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        builder.try_deserialize()
    }
}
