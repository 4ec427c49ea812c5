use thiserror::Error;

/// Errors that can occur when starting an RK3 integration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("start point ({x}, {y}) must be finite")]
    NonFiniteStart { x: f64, y: f64 },

    #[error("start x = {x} must lie before the boundary at {x_end}")]
    StartBeyondBoundary { x: f64, x_end: f64 },
}
