//! Adaptive third-order Runge-Kutta solver for scalar ODE problems.
//!
//! # Algorithm
//!
//! Each step is the explicit third-order scheme
//!
//! ```text
//! k1 = f(x, y)
//! k2 = f(x + h/2, y + h·k1/2)
//! k3 = f(x + h, y + h·(2·k2 − k1))
//! y' = y + h·(k1 + 4·k2 + k3)/6
//! ```
//!
//! The local error is estimated by step doubling: one step of `h` is compared
//! with two steps of `h/2`, and Richardson extrapolation gives
//! `S = (y_half_half − y_full) / 7`. With tolerance `eps`:
//!
//! - `|S| < eps/16`: accept the full step and double `h` for the next one
//! - `eps/16 ≤ |S| ≤ eps`: accept the full step and keep `h`
//! - `|S| > eps`: halve `h` and accept a single step at the halved size
//!   without estimating again
//!
//! A step that would carry `x` past the boundary is halved until it fits and
//! taken as is, overriding the error bands. Integration ends once `x` lies
//! within the boundary precision of the end, or after `max_steps` steps.
//!
//! There is no floor on the step size. If repeated halving drives `h` so low
//! that `x + h == x`, the solver stops with [`Status::StepSizeUnderflow`]
//! instead of spending the rest of the step budget standing still.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] for the start point (step 0) and one after
//! each accepted step. Observers can return [`Action::StopEarly`] to halt
//! immediately; the trajectory so far is returned.
//!
//! # Example
//!
//! ```ignore
//! use coil_solvers::transient::rk3::{self, Boundary, Config};
//!
//! let config = Config::new(1e-3, 5000, 1e-5, Boundary::new(1.0, 1e-4)?)?;
//! let solution = rk3::solve_unobserved(&circuit, Point::new(0.0, 0.0), &config)?;
//!
//! for sample in &solution.trajectory {
//!     println!("x={}: I={}", sample.x, sample.current);
//! }
//! ```

mod action;
mod boundary;
mod config;
mod control;
mod error;
mod estimate;
mod event;
pub mod fixed;
mod solution;
mod state;
mod stats;
mod step;
mod trajectory;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use boundary::Boundary;
pub use config::{Config, ConfigError};
pub use control::Adjustment;
pub use error::Error;
pub use estimate::Estimate;
pub use event::Event;
pub use solution::{Solution, Status};
pub use stats::{Extremum, Statistics};
pub use step::step;
pub use trajectory::{Sample, Trajectory};

use coil_core::{Observer, Point, ScalarOde};
use log::{debug, warn};

use control::Controller;
use state::State;

/// Integrates `ode` from `start` with adaptive RK3 steps.
///
/// # Observer
///
/// The observer receives an [`Event`] for the start point and after each
/// accepted step, and may return [`Action::StopEarly`] to end the run.
///
/// # Errors
///
/// Returns an error if `start` is non-finite or does not lie strictly before
/// the configured boundary.
pub fn solve<F, Obs>(
    ode: &F,
    start: Point,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarOde + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let boundary = config.boundary();
    if !start.is_finite() {
        return Err(Error::NonFiniteStart {
            x: start.x,
            y: start.y,
        });
    }
    if start.x >= boundary.x_end() {
        return Err(Error::StartBeyondBoundary {
            x: start.x,
            x_end: boundary.x_end(),
        });
    }

    let controller = Controller::new(config);
    let mut state = State::new(ode, start, config);

    let event = Event {
        step: 0,
        sample: state.last(),
        next_step: state.next_step(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(state.into_solution(Status::StoppedByObserver));
    }

    for step in 1..=config.max_steps() {
        let (x, y, h) = state.position();
        if boundary.is_reached(x) {
            return Ok(state.into_solution(Status::ReachedBoundary));
        }

        let clamped = boundary.clamp(x, h);
        let attempted = clamped.unwrap_or(h);
        let estimate = Estimate::new(ode, x, y, attempted);
        let decision = controller.decide(ode, x, y, attempted, &estimate, clamped.is_some());

        if x + decision.step == x {
            warn!(
                "step size {} no longer advances x = {x}; stopping after {} steps",
                decision.step,
                step - 1
            );
            return Ok(state.into_solution(Status::StepSizeUnderflow));
        }

        state.commit(ode, &estimate, attempted, decision);
        debug!(
            "step {step}: x = {}, h = {}, S = {:e}, {:?}",
            x + decision.step,
            decision.step,
            estimate.local_error,
            decision.adjustment
        );

        let event = Event {
            step,
            sample: state.last(),
            next_step: state.next_step(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(state.into_solution(Status::StoppedByObserver));
        }
    }

    let (x, _, _) = state.position();
    let status = if boundary.is_reached(x) {
        Status::ReachedBoundary
    } else {
        Status::StepBudgetExhausted
    };
    Ok(state.into_solution(status))
}

/// Integrates `ode` from `start` with adaptive RK3 steps, without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if `start` is non-finite or does not lie strictly before
/// the configured boundary.
pub fn solve_unobserved<F>(ode: &F, start: Point, config: &Config) -> Result<Solution, Error>
where
    F: ScalarOde + ?Sized,
{
    solve(ode, start, config, ())
}
