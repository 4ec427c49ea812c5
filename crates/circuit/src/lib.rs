//! Driven series RL circuit model.
//!
//! The transient current through an inductor `L` and resistor `R` in series
//! with a sinusoidal source `E0·sin(w·x)` obeys
//!
//! ```text
//! dI/dx = sin(w·x)·E0/L − R·I/L
//! ```
//!
//! [`Circuit`] holds the four physical constants and implements
//! [`ScalarOde`](coil_core::ScalarOde) for this equation, including its
//! closed-form solution so solvers can report the true global error.

mod circuit;
mod error;
mod exact;

pub use circuit::Circuit;
pub use error::CircuitError;
