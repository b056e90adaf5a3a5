use std::fmt;

use super::agent::Agent;
use super::floor_set::FloorSet;

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
pub enum Behaviour {
    Idle,
    Moving,
    DoorCheck,
}

impl Behaviour {
    pub fn as_string(&self) -> String {
        match self {
            Behaviour::Idle => String::from("idle"),
            Behaviour::Moving => String::from("moving"),
            Behaviour::DoorCheck => String::from("doorCheck"),
        }
    }
}

/// Consistent snapshot of the car, taken under its lock.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct CarStatus {
    pub floor: u8,
    pub pending: FloorSet,
    pub occupant: Option<Agent>,
    pub behaviour: Behaviour,
}

/// Result of the access check made on arrival. A denial is an ordinary
/// outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DoorOutcome {
    Opened { agent: String, floor: u8 },
    Denied { agent: String, floor: u8 },
    NoOccupant { floor: u8 },
}

impl DoorOutcome {
    pub fn floor(&self) -> u8 {
        match self {
            DoorOutcome::Opened { floor, .. }
            | DoorOutcome::Denied { floor, .. }
            | DoorOutcome::NoOccupant { floor } => *floor,
        }
    }
}

/// Advisory notifications published by the car. Nothing in the car depends
/// on anyone receiving them.
#[derive(Debug, Clone, PartialEq)]
pub enum CarEvent {
    Requested { agent: String, floor: u8 },
    Moving { from: u8, to: u8 },
    Door(DoorOutcome),
    Boarded { agent: String },
    Exited { agent: String },
}

impl fmt::Display for CarEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarEvent::Requested { agent, floor } => write!(f, "agent {} called the elevator to floor {}", agent, floor),
            CarEvent::Moving { to, .. } => write!(f, "elevator moving to floor {}", to),
            CarEvent::Door(DoorOutcome::Opened { agent, floor }) => write!(f, "door opens at floor {} for agent {}", floor, agent),
            CarEvent::Door(DoorOutcome::Denied { agent, floor }) => write!(f, "agent {} denied access at floor {}", agent, floor),
            CarEvent::Door(DoorOutcome::NoOccupant { .. }) => write!(f, "no agent in elevator"),
            CarEvent::Boarded { agent } => write!(f, "agent {} entered the elevator", agent),
            CarEvent::Exited { agent } => write!(f, "agent {} exited the elevator", agent),
        }
    }
}
