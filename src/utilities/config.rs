use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use super::agent::Agent;
use super::clearance::ClearanceLevel;
use super::error::ConfigError;

const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct AgentEntry {
    pub name: String,
    pub clearance: ClearanceLevel,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct ConfigFile {
    pub num_floors: u8,
    pub floor_travel_ms: u64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub ride: bool,
    pub seed: Option<u64>,
    pub run_for_secs: Option<u64>,
    pub status_panel: bool,
    pub agents: Vec<AgentEntry>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        ConfigFile {
            num_floors: 4,
            floor_travel_ms: 1000,
            min_delay_ms: 1000,
            max_delay_ms: 5000,
            ride: false,
            seed: None,
            run_for_secs: None,
            status_panel: false,
            agents: vec![
                AgentEntry { name: String::from("Agent A"), clearance: ClearanceLevel::Low },
                AgentEntry { name: String::from("Agent B"), clearance: ClearanceLevel::Medium },
                AgentEntry { name: String::from("Agent C"), clearance: ClearanceLevel::High },
            ],
        }
    }
}

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "secure_elevator", about = "Single-car elevator with floor access control")]
pub struct Args {
    /// Path to a JSON config file
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of floors served by the car
    #[arg(long)]
    pub floors: Option<u8>,
    /// Seed for the requester workload
    #[arg(long)]
    pub seed: Option<u64>,
    /// Stop after this many seconds
    #[arg(long = "run-for")]
    pub run_for: Option<u64>,
    /// Let agents board, ride and exit instead of only calling the car
    #[arg(long)]
    pub ride: bool,
    /// Redraw a status table on every car event
    #[arg(long = "status-panel")]
    pub status_panel: bool,
}

#[derive(Debug, Clone)]
pub struct CarSettings {
    pub num_floors: u8,
    pub floor_travel_time: Duration,
}

#[derive(Debug, Clone)]
pub struct WorkloadSettings {
    pub min_delay: Duration,
    pub max_delay: Duration,
    pub ride: bool,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub car: CarSettings,
    pub workload: WorkloadSettings,
    pub agents: Vec<Agent>,
    pub run_for: Option<Duration>,
    pub status_panel: bool,
}

impl Config {
    pub fn get(args: &Args) -> Result<Self, ConfigError> {
        let config_file = read_config_file(args.config.clone())?;
        Self::from_parts(config_file, args)
    }

    pub fn from_parts(config_file: ConfigFile, args: &Args) -> Result<Self, ConfigError> {
        let num_floors = args.floors.unwrap_or(config_file.num_floors);
        if num_floors == 0 {
            return Err(ConfigError::Invalid(String::from("numFloors must be at least 1")))
        }
        if config_file.min_delay_ms > config_file.max_delay_ms {
            return Err(ConfigError::Invalid(format!(
                "minDelayMs ({}) is larger than maxDelayMs ({})",
                config_file.min_delay_ms, config_file.max_delay_ms,
            )))
        }
        if config_file.agents.is_empty() {
            return Err(ConfigError::Invalid(String::from("at least one agent is required")))
        }

        Ok(Config {
            car: CarSettings {
                num_floors: num_floors,
                floor_travel_time: Duration::from_millis(config_file.floor_travel_ms),
            },
            workload: WorkloadSettings {
                min_delay: Duration::from_millis(config_file.min_delay_ms),
                max_delay: Duration::from_millis(config_file.max_delay_ms),
                ride: args.ride || config_file.ride,
                seed: args.seed.or(config_file.seed),
            },
            agents: config_file.agents.into_iter()
                .map(|entry| Agent::new(entry.clearance, entry.name))
                .collect(),
            run_for: args.run_for.or(config_file.run_for_secs).map(Duration::from_secs),
            status_panel: args.status_panel || config_file.status_panel,
        })
    }
}

fn read_config_file(path: Option<PathBuf>) -> Result<ConfigFile, ConfigError> {
    let explicit = path.is_some();
    let file_path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    match fs::read_to_string(&file_path) {
        Ok(content) => Ok(serde_json::from_str(&content)?),
        Err(err) if err.kind() == ErrorKind::NotFound && !explicit => {
            tracing::info!("no configuration file provided, using default settings...");
            Ok(ConfigFile::default())
        },
        Err(err) => Err(ConfigError::Io {
            path: file_path.display().to_string(),
            source: err,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_three_agent_building() {
        let config = Config::from_parts(ConfigFile::default(), &Args::default()).unwrap();
        assert_eq!(config.car.num_floors, 4);
        assert_eq!(config.car.floor_travel_time, Duration::from_secs(1));
        assert_eq!(config.agents.len(), 3);
        assert_eq!(config.agents[2].clearance(), ClearanceLevel::High);
        assert!(config.run_for.is_none());
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let config_file: ConfigFile = serde_json::from_str(r#"{ "floorTravelMs": 0, "seed": 7 }"#).unwrap();
        let config = Config::from_parts(config_file, &Args::default()).unwrap();
        assert_eq!(config.car.floor_travel_time, Duration::ZERO);
        assert_eq!(config.workload.seed, Some(7));
        assert_eq!(config.car.num_floors, 4);
    }

    #[test]
    fn args_override_file() {
        let args = Args { floors: Some(6), seed: Some(1), run_for: Some(10), ride: true, ..Args::default() };
        let config = Config::from_parts(ConfigFile::default(), &args).unwrap();
        assert_eq!(config.car.num_floors, 6);
        assert_eq!(config.workload.seed, Some(1));
        assert_eq!(config.run_for, Some(Duration::from_secs(10)));
        assert!(config.workload.ride);
    }

    #[test]
    fn rejects_inverted_delay_range() {
        let config_file = ConfigFile { min_delay_ms: 10, max_delay_ms: 5, ..ConfigFile::default() };
        assert!(matches!(
            Config::from_parts(config_file, &Args::default()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn rejects_empty_building() {
        let args = Args { floors: Some(0), ..Args::default() };
        assert!(Config::from_parts(ConfigFile::default(), &args).is_err());
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = Config::get(&Args {
            config: Some(PathBuf::from("/nonexistent/secure_elevator.json")),
            ..Args::default()
        });
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
