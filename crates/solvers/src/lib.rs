//! Numerical solvers for the Coil framework.
//!
//! # Modules
//!
//! - [`transient`]: integrators that march a [`ScalarOde`] forward in its
//!   independent variable
//!
//! [`ScalarOde`]: coil_core::ScalarOde

pub mod transient;
