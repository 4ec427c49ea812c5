//! Transient solvers: marching an ODE forward from an initial condition.
//!
//! A [`ScalarOde`] supplies `dy/dx = f(x, y)`. Solvers in this module advance
//! `y` from a start [`Point`] and record every accepted sample.
//!
//! # Solvers
//!
//! - [`rk3`]: third-order Runge-Kutta with step-doubling error control and
//!   boundary-aligned termination, plus a fixed-step variant
//!
//! [`ScalarOde`]: coil_core::ScalarOde
//! [`Point`]: coil_core::Point

pub mod rk3;
