use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{after, never, select, unbounded, Sender};

use crate::utilities::config::Config;

pub mod announcer;
pub mod car;
pub mod dispatcher;
pub mod requester;

use car::Car;
use requester::{RandomWorkload, Requester};

/// Starts the car, its dispatcher, the announcer and one requester per
/// configured agent, then blocks until the configured run time is over.
/// Without a run time it blocks until the process is killed.
pub fn run(config: Config) -> std::io::Result<()> {
    // INITIALIZE CHANNELS
    let (events_tx, events_rx) = unbounded();
    let (requesters_stop_tx, requesters_stop_rx) = unbounded::<()>();
    let (announcer_stop_tx, announcer_stop_rx) = unbounded::<()>();

    let car = Arc::new(Car::new(&config.car, events_tx));

    // INITIALIZE THREAD FOR ANNOUNCEMENTS
    let announcer = {
        let car = car.clone();
        let status_panel = config.status_panel;
        thread::Builder::new().name("announcer".to_string()).spawn(move || announcer::main(
            car,
            events_rx,
            announcer_stop_rx,
            status_panel,
        ))?
    };

    // INITIALIZE THREAD FOR THE DISPATCHER
    let dispatcher = {
        let car = car.clone();
        match thread::Builder::new().name("dispatcher".to_string()).spawn(move || car.run()) {
            Ok(handle) => handle,
            Err(err) => {
                tracing::error!("failed to start dispatcher: {}", err);
                drop(announcer_stop_tx);
                join(announcer, "announcer");
                return Err(err)
            },
        }
    };

    // INITIALIZE ONE THREAD PER AGENT
    let mut requesters = Vec::with_capacity(config.agents.len());
    for (index, agent) in config.agents.iter().enumerate() {
        tracing::info!("starting requester for agent {}", agent);
        let workload = RandomWorkload::new(&config.workload, index as u64);
        let requester = Requester::new(car.clone(), agent.clone(), workload, config.workload.ride);
        match requester.spawn(requesters_stop_rx.clone()) {
            Ok(handle) => requesters.push(handle),
            Err(err) => {
                tracing::error!("failed to start requester for agent {}: {}", agent, err);
                stop_all(&car, requesters_stop_tx, requesters, dispatcher, announcer_stop_tx, announcer);
                return Err(err)
            },
        }
    }

    let deadline = match config.run_for {
        Some(duration) => after(duration),
        None => never(),
    };
    select! {
        recv(deadline) -> _ => tracing::info!("run time elapsed, stopping..."),
    }

    stop_all(&car, requesters_stop_tx, requesters, dispatcher, announcer_stop_tx, announcer);
    Ok(())
}

/// Stops requesters first, then the dispatcher, then the announcer so the
/// last car events still get logged.
fn stop_all(
    car: &Car,
    requesters_stop_tx: Sender<()>,
    requesters: Vec<JoinHandle<()>>,
    dispatcher: JoinHandle<()>,
    announcer_stop_tx: Sender<()>,
    announcer: JoinHandle<()>,
) {
    drop(requesters_stop_tx);
    for handle in requesters {
        join(handle, "requester");
    }
    car.shutdown();
    join(dispatcher, "dispatcher");
    drop(announcer_stop_tx);
    join(announcer, "announcer");
}

fn join(handle: JoinHandle<()>, name: &str) {
    if handle.join().is_err() {
        tracing::error!("{} thread panicked", name);
    }
}
