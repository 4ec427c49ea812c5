use thiserror::Error;

/// Errors that can occur when constructing a [`Circuit`](crate::Circuit).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CircuitError {
    #[error("inductance must be non-zero")]
    ZeroInductance,

    #[error("{0} must be finite")]
    NonFinite(&'static str),
}
