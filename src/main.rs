use bandit_agents::config::AppConfig;
use bandit_agents::errors::SimulationError;
use bandit_agents::simulation::Simulation;

use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SimulationError> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.simulation.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = Simulation::new(&config)?.run()?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
