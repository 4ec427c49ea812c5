//! Core traits and types for the Coil integrator.
//!
//! This crate defines the shared abstractions that the solver, circuit model,
//! and observers build on:
//!
//! - [`ScalarOde`]: a first-order scalar ODE `dy/dx = f(x, y)`, optionally
//!   with a closed-form solution for verification
//! - [`Point`]: a single `(x, y)` pair on a solution curve
//! - [`Observer`]: receives solver events and optionally returns control actions

mod observer;
mod ode;
mod point;

pub use observer::Observer;
pub use ode::ScalarOde;
pub use point::Point;
