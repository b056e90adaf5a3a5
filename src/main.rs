use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use secure_elevator::modules;
use secure_elevator::utilities::config::{Args, Config};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // READ CONFIGURATION
    let args = Args::parse();
    let config = Config::get(&args).context("failed to load configuration")?;
    tracing::info!(
        floors = config.car.num_floors,
        agents = config.agents.len(),
        ride = config.workload.ride,
        "elevator started"
    );

    modules::run(config).context("failed to start elevator threads")?;
    tracing::info!("stopping program...");
    Ok(())
}
