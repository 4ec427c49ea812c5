//! Reusable observers and reporting for the Coil framework.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the Coil solvers, plus plain-text formatting of their results.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for observers
//!   ([`HasPosition`], [`HasStepSize`], [`HasLocalError`], [`CanStopEarly`])
//! - [`table`]: Text rendering of a trajectory and its statistics
//!
//! # Observers
//!
//! - [`LogObserver`]: forwards every event to the `log` facade
//! - [`StepFloor`]: stops a run once the step size drops below a threshold
//!
//! [`Observer`]: coil_core::Observer
//! [`HasPosition`]: traits::HasPosition
//! [`HasStepSize`]: traits::HasStepSize
//! [`HasLocalError`]: traits::HasLocalError
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod table;
pub mod traits;

mod floor;
mod logging;

pub use floor::StepFloor;
pub use logging::LogObserver;
