/// ----- ANNOUNCER MODULE -----
/// Turns car events into log lines and, when enabled, keeps a status table
/// up to date on the terminal.

use std::sync::Arc;

use crossbeam_channel::{select, Receiver};

use crate::utilities::car_status::CarEvent;
use crate::utilities::debug::Debug;

use super::car::Car;

pub fn main(
    car: Arc<Car>,
    events_rx: Receiver<CarEvent>,
    stop_rx: Receiver<()>,
    status_panel: bool,
) {
    let mut debug = if status_panel { Some(Debug::new(car.num_floors())) } else { None };

    loop {
        select! {
            recv(events_rx) -> msg => {
                match msg {
                    Ok(event) => announce(&car, &mut debug, &event),
                    Err(_) => return,
                }
            },
            recv(stop_rx) -> _ => {
                for event in events_rx.try_iter() {
                    announce(&car, &mut debug, &event);
                }
                return
            },
        }
    }
}

fn announce(car: &Car, debug: &mut Option<Debug>, event: &CarEvent) {
    tracing::info!("{}", event);
    let failed = match debug {
        Some(panel) => panel.printstatus(&car.status()).err(),
        None => None,
    };
    if let Some(err) = failed {
        tracing::warn!("status panel disabled: {}", err);
        *debug = None;
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use crossbeam_channel::unbounded;

    use super::*;
    use crate::modules::car::test_car;

    #[test]
    fn drains_pending_events_and_stops() {
        let (car, events_rx) = test_car(4);
        let car = Arc::new(car);
        let (stop_tx, stop_rx) = unbounded();
        car.request_floor(1, &crate::utilities::agent::Agent::new(
            crate::utilities::clearance::ClearanceLevel::Low,
            "Agent A",
        )).unwrap();
        let handle = {
            let car = car.clone();
            let events_rx = events_rx.clone();
            thread::spawn(move || main(car, events_rx, stop_rx, false))
        };
        drop(stop_tx);
        handle.join().unwrap();
        assert!(events_rx.is_empty());
    }
}
