/// ----- CAR MODULE -----
/// This module owns the shared state of the elevator car: where it is,
/// which floors are waiting for service and who is inside. Every read and
/// write goes through one lock, so the dispatcher always sees occupant and
/// floor together.

use std::time::Duration;

use crossbeam_channel::Sender;
use parking_lot::{Condvar, Mutex};

use crate::utilities::agent::Agent;
use crate::utilities::car_status::{Behaviour, CarEvent, CarStatus};
use crate::utilities::config::CarSettings;
use crate::utilities::error::CarError;
use crate::utilities::floor_set::FloorSet;

#[derive(Debug)]
pub(super) struct CarState {
    pub(super) floor: u8,
    pub(super) pending: FloorSet,
    pub(super) occupant: Option<Agent>,
    pub(super) behaviour: Behaviour,
    pub(super) stopping: bool,
}

pub struct Car {
    pub(super) state: Mutex<CarState>,
    pub(super) work_available: Condvar,
    pub(super) floor_travel_time: Duration,
    num_floors: u8,
    events_tx: Sender<CarEvent>,
}

impl Car {
    pub fn new(settings: &CarSettings, events_tx: Sender<CarEvent>) -> Self {
        Car {
            state: Mutex::new(CarState {
                floor: 0,
                pending: FloorSet::new(settings.num_floors),
                occupant: None,
                behaviour: Behaviour::Idle,
                stopping: false,
            }),
            work_available: Condvar::new(),
            floor_travel_time: settings.floor_travel_time,
            num_floors: settings.num_floors,
            events_tx: events_tx,
        }
    }

    pub fn num_floors(&self) -> u8 {
        self.num_floors
    }

    /// Flags `floor` for service and wakes the dispatcher. Does not wait for
    /// the car to get there. Repeated calls before service collapse into one
    /// pending flag; `agent` is only recorded in the announcement.
    pub fn request_floor(&self, floor: u8, agent: &Agent) -> Result<(), CarError> {
        let mut state = self.state.lock();
        if !state.pending.insert(floor) {
            return Err(CarError::InvalidFloor { floor: floor, num_floors: self.num_floors })
        }
        self.announce(CarEvent::Requested { agent: agent.name().to_string(), floor: floor });
        self.work_available.notify_all();
        Ok(())
    }

    pub fn board(&self, agent: &Agent) -> Result<(), CarError> {
        let mut state = self.state.lock();
        if let Some(occupant) = &state.occupant {
            return Err(CarError::Occupied { occupant: occupant.name().to_string() })
        }
        state.occupant = Some(agent.clone());
        self.announce(CarEvent::Boarded { agent: agent.name().to_string() });
        Ok(())
    }

    /// Empties the car and hands back whoever was inside.
    pub fn exit(&self) -> Result<Agent, CarError> {
        let mut state = self.state.lock();
        let agent = state.occupant.take().ok_or(CarError::EmptyCar)?;
        self.announce(CarEvent::Exited { agent: agent.name().to_string() });
        Ok(agent)
    }

    pub fn status(&self) -> CarStatus {
        let state = self.state.lock();
        CarStatus {
            floor: state.floor,
            pending: state.pending.clone(),
            occupant: state.occupant.clone(),
            behaviour: state.behaviour,
        }
    }

    /// Asks the dispatcher to stop. It leaves its idle wait right away, or
    /// finishes the current trip without a door check.
    pub fn shutdown(&self) {
        let mut state = self.state.lock();
        state.stopping = true;
        self.work_available.notify_all();
    }

    pub fn is_stopping(&self) -> bool {
        self.state.lock().stopping
    }

    pub(super) fn announce(&self, event: CarEvent) {
        // nobody listening is fine
        let _ = self.events_tx.send(event);
    }
}

#[cfg(test)]
pub(crate) fn test_car(num_floors: u8) -> (Car, crossbeam_channel::Receiver<CarEvent>) {
    let (events_tx, events_rx) = crossbeam_channel::unbounded();
    let settings = CarSettings { num_floors: num_floors, floor_travel_time: Duration::ZERO };
    (Car::new(&settings, events_tx), events_rx)
}
