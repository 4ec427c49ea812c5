//! Integrates the driven RL circuit and prints the trajectory as a table.
//!
//! Usage: `coil [parameters.toml|parameters.yaml]`
//!
//! Without a file the reference parameters are used. Set `RUST_LOG=debug`
//! (or `trace` for every observer event) to follow the step controller.

mod parameters;

use std::{
    error::Error,
    io::{self, Write},
    path::Path,
};

use coil_core::Observer;
use coil_observers::{
    LogObserver, StepFloor,
    table::{Summary, Table},
};
use coil_solvers::transient::rk3;
use log::{Level, info};

use parameters::Parameters;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let parameters = match std::env::args().nth(1) {
        Some(path) => {
            info!("loading parameters from {path}");
            Parameters::load(Path::new(&path))?
        }
        None => {
            info!("no parameter file given; using reference parameters");
            Parameters::default()
        }
    };
    let circuit = parameters.circuit()?;
    let config = parameters.config()?;
    let start = parameters.start();

    info!(
        "integrating from x = {} to {} with h0 = {}, eps = {:e}, at most {} steps",
        start.x,
        config.boundary().x_end(),
        config.initial_step(),
        config.tolerance(),
        config.max_steps()
    );

    let mut logger = LogObserver::new(Level::Trace);
    let mut floor = parameters.min_step.map(StepFloor::new);
    let solution = rk3::solve(&circuit, start, &config, |event: &rk3::Event<'_>| {
        let logged: Option<rk3::Action> = logger.observe(event);
        let guarded: Option<rk3::Action> = floor
            .as_mut()
            .and_then(|floor| floor.observe(event));
        logged.or(guarded)
    })?;

    info!(
        "{:?} after {} steps at x = {}",
        solution.status,
        solution.steps,
        solution.trajectory.last().x
    );

    let mut out = io::stdout().lock();
    write!(out, "{}", Table::new(&solution.trajectory))?;
    writeln!(out)?;
    write!(out, "{}", Summary::new(&solution))?;
    out.flush()?;
    Ok(())
}
