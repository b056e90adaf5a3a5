use thiserror::Error;

/// Errors returned synchronously to whoever called into the car. None of
/// them are fatal to the car or its dispatcher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarError {
    #[error("floor {floor} is outside the building (0..{num_floors})")]
    InvalidFloor { floor: u8, num_floors: u8 },

    #[error("car is already occupied by {occupant}")]
    Occupied { occupant: String },

    #[error("car is empty")]
    EmptyCar,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
