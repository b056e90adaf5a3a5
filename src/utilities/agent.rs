use std::fmt;

use super::clearance::ClearanceLevel;

/// A requester identity. Both fields are fixed once constructed; all
/// mutable state lives in the car.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Agent {
    name: String,
    clearance: ClearanceLevel,
}

impl Agent {
    pub fn new(clearance: ClearanceLevel, name: impl Into<String>) -> Self {
        Agent {
            name: name.into(),
            clearance: clearance,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clearance(&self) -> ClearanceLevel {
        self.clearance
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.clearance)
    }
}
