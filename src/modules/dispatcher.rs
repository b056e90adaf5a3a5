/// ----- DISPATCHER MODULE -----
/// The control loop of the car. It sleeps until a floor is pending, drives
/// to the lowest pending floor, and checks the occupant's clearance when
/// the doors are about to open.
///
/// The lock is released while the car travels, so requests, boarding and
/// exits are not held up by a trip. Position, the pending flag and the door
/// check are all committed under the lock once the car arrives.

use parking_lot::MutexGuard;

use crate::utilities::access::can_access;
use crate::utilities::car_status::{Behaviour, CarEvent, DoorOutcome};

use super::car::{Car, CarState};

impl Car {
    /// Runs the dispatcher until [`Car::shutdown`] is called.
    pub fn run(&self) {
        tracing::debug!("dispatcher started");
        while self.service_next().is_some() {}
        tracing::debug!("dispatcher stopped");
    }

    /// Runs one dispatcher cycle: waits for work, serves the lowest pending
    /// floor and returns the door outcome. Returns `None` once the car is
    /// shutting down.
    pub fn service_next(&self) -> Option<DoorOutcome> {
        let mut state = self.state.lock();

        let target = loop {
            if state.stopping {
                state.behaviour = Behaviour::Idle;
                return None
            }
            if let Some(floor) = state.pending.lowest() {
                break floor
            }
            state.behaviour = Behaviour::Idle;
            self.work_available.wait(&mut state);
        };

        let from = state.floor;
        // a request for the current floor still counts as a (zero-length) move
        state.behaviour = Behaviour::Moving;
        tracing::debug!(from, to = target, "moving");
        self.announce(CarEvent::Moving { from: from, to: target });

        let travel_time = self.floor_travel_time * u32::from(from.abs_diff(target));
        if !travel_time.is_zero() {
            MutexGuard::unlocked(&mut state, || std::thread::sleep(travel_time));
        }

        // arrived; a request for this floor made during the trip is served now too
        state.floor = target;
        state.pending.remove(target);
        if state.stopping {
            state.behaviour = Behaviour::Idle;
            return None
        }

        state.behaviour = Behaviour::DoorCheck;
        let outcome = door_check(&state, self.num_floors());
        tracing::debug!(floor = target, ?outcome, more_pending = state.pending.any(), "door check");
        self.announce(CarEvent::Door(outcome.clone()));
        state.behaviour = Behaviour::Idle;
        Some(outcome)
    }
}

fn door_check(state: &CarState, num_floors: u8) -> DoorOutcome {
    match &state.occupant {
        None => DoorOutcome::NoOccupant { floor: state.floor },
        Some(agent) if can_access(agent.clearance(), state.floor, num_floors) => DoorOutcome::Opened {
            agent: agent.name().to_string(),
            floor: state.floor,
        },
        Some(agent) => DoorOutcome::Denied {
            agent: agent.name().to_string(),
            floor: state.floor,
        },
    }
}
