/// ----- REQUESTER MODULE -----
/// Each agent runs as its own thread and calls the car at whatever pace its
/// workload dictates. Calls are fire-and-forget: the car never reports
/// back when a floor has been served.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{select, Receiver};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::utilities::agent::Agent;
use crate::utilities::config::WorkloadSettings;
use crate::utilities::error::CarError;

use super::car::Car;

const BOARD_RETRY_DELAY: Duration = Duration::from_millis(250);
const MAX_BOARD_ATTEMPTS: u32 = 20;

/// Source of floors and pauses for a requester.
pub trait Workload: Send {
    fn next_floor(&mut self, num_floors: u8) -> u8;
    fn next_delay(&mut self) -> Duration;
}

pub struct RandomWorkload {
    rng: StdRng,
    min_delay_ms: u64,
    max_delay_ms: u64,
}

impl RandomWorkload {
    /// `stream` separates agents sharing one configured seed.
    pub fn new(settings: &WorkloadSettings, stream: u64) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
            None => StdRng::from_os_rng(),
        };
        RandomWorkload {
            rng: rng,
            min_delay_ms: settings.min_delay.as_millis() as u64,
            max_delay_ms: settings.max_delay.as_millis() as u64,
        }
    }
}

impl Workload for RandomWorkload {
    fn next_floor(&mut self, num_floors: u8) -> u8 {
        self.rng.random_range(0..num_floors)
    }

    fn next_delay(&mut self) -> Duration {
        Duration::from_millis(self.rng.random_range(self.min_delay_ms..=self.max_delay_ms))
    }
}

pub struct Requester<W: Workload> {
    car: Arc<Car>,
    agent: Agent,
    workload: W,
    ride: bool,
}

impl<W: Workload + 'static> Requester<W> {
    pub fn new(car: Arc<Car>, agent: Agent, workload: W, ride: bool) -> Self {
        Requester {
            car: car,
            agent: agent,
            workload: workload,
            ride: ride,
        }
    }

    pub fn spawn(self, stop_rx: Receiver<()>) -> std::io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name(format!("requester {}", self.agent.name()))
            .spawn(move || self.run(stop_rx))
    }

    /// Loops until `stop_rx` receives a message, its sender is dropped or
    /// the car is shut down.
    pub fn run(mut self, stop_rx: Receiver<()>) {
        loop {
            if self.car.is_stopping() {
                tracing::debug!("car stopped, agent {} leaves", self.agent.name());
                return
            }
            let floor = self.workload.next_floor(self.car.num_floors());
            tracing::info!("agent {} is on floor {}", self.agent.name(), floor);
            self.call(floor);

            if self.ride && !self.ride_once(&stop_rx) {
                return
            }

            let delay = self.workload.next_delay();
            if !pause(&stop_rx, delay) {
                return
            }
        }
    }

    fn call(&self, floor: u8) {
        if let Err(err) = self.car.request_floor(floor, &self.agent) {
            tracing::warn!("agent {} could not call the elevator: {}", self.agent.name(), err);
        }
    }

    /// Boards, picks a destination, rides and exits. Returns false if asked
    /// to stop along the way.
    fn ride_once(&mut self, stop_rx: &Receiver<()>) -> bool {
        let mut attempts = 0;
        loop {
            match self.car.board(&self.agent) {
                Ok(()) => break,
                Err(CarError::Occupied { occupant }) => {
                    attempts += 1;
                    if attempts >= MAX_BOARD_ATTEMPTS {
                        tracing::warn!("agent {} gave up waiting for {} to leave", self.agent.name(), occupant);
                        return true
                    }
                    if !pause(stop_rx, BOARD_RETRY_DELAY) {
                        return false
                    }
                },
                Err(err) => {
                    tracing::warn!("agent {} could not board: {}", self.agent.name(), err);
                    return true
                },
            }
        }

        let destination = self.workload.next_floor(self.car.num_floors());
        self.call(destination);

        let ride_time = self.workload.next_delay();
        let keep_going = pause(stop_rx, ride_time);
        if let Err(err) = self.car.exit() {
            tracing::warn!("agent {} could not exit: {}", self.agent.name(), err);
        }
        keep_going
    }
}

/// Waits for `delay`. Returns false if told to stop first.
fn pause(stop_rx: &Receiver<()>, delay: Duration) -> bool {
    select! {
        recv(stop_rx) -> _ => false,
        default(delay) => true,
    }
}
