//! Capability traits for observers.
//!
//! These traits abstract over solver-specific event and action types, so an
//! observer can be written once against the capabilities it needs.
//!
//! # Event traits
//!
//! - [`HasPosition`]: events located at a value of the independent variable
//! - [`HasStepSize`]: events that carry the step size just taken
//! - [`HasLocalError`]: events that carry an error estimate
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use coil_core::Observer;
//! use coil_observers::traits::{CanStopEarly, HasPosition};
//!
//! struct StopAt {
//!     x: f64,
//! }
//!
//! impl<E: HasPosition, A: CanStopEarly> Observer<E, A> for StopAt {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.x() >= self.x).then(A::stop_early)
//!     }
//! }
//! ```

use coil_solvers::transient::rk3;

/// An event located at a value of the independent variable.
pub trait HasPosition {
    /// Returns `x` for this event.
    fn x(&self) -> f64;
}

/// An event that carries the step size just taken.
pub trait HasStepSize {
    /// Returns the step size, or `None` for events that follow no step.
    fn step_size(&self) -> Option<f64>;
}

/// An event that carries a local error estimate.
pub trait HasLocalError {
    /// Returns the reported error for this event.
    fn local_error(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- rk3::Event ---

impl HasPosition for rk3::Event<'_> {
    fn x(&self) -> f64 {
        self.sample.x
    }
}

impl HasStepSize for rk3::Event<'_> {
    fn step_size(&self) -> Option<f64> {
        (self.step > 0).then_some(self.sample.step)
    }
}

impl HasLocalError for rk3::Event<'_> {
    fn local_error(&self) -> f64 {
        self.sample.scaled_error()
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for rk3::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
