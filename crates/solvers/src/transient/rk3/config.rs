use thiserror::Error;

use super::Boundary;

/// Configuration for the RK3 solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    initial_step: f64,
    max_steps: usize,
    tolerance: f64,
    boundary: Boundary,
    max_step: Option<f64>,
}

/// Errors that can occur when validating an RK3 solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial step must be finite and positive")]
    InitialStep,

    #[error("tolerance must be positive")]
    Tolerance,

    #[error("boundary must be finite")]
    BoundaryEnd,

    #[error("boundary precision must be finite and non-negative")]
    BoundaryPrecision,

    #[error("max step must be finite and no smaller than the initial step")]
    MaxStep,
}

impl Config {
    /// Creates a new config.
    ///
    /// `max_steps` bounds the number of accepted steps; zero yields a
    /// trajectory holding only the start point. An infinite `tolerance` is
    /// allowed and makes every step a candidate for growth.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_step` is not finite and positive, or
    /// `tolerance` is not positive.
    pub fn new(
        initial_step: f64,
        max_steps: usize,
        tolerance: f64,
        boundary: Boundary,
    ) -> Result<Self, ConfigError> {
        if !initial_step.is_finite() || initial_step <= 0.0 {
            return Err(ConfigError::InitialStep);
        }
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            initial_step,
            max_steps,
            tolerance,
            boundary,
            max_step: None,
        })
    }

    /// Caps step-size growth at `max_step`.
    ///
    /// By default the step size may double without limit.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_step` is non-finite or below the initial step.
    pub fn with_max_step(self, max_step: f64) -> Result<Self, ConfigError> {
        if !max_step.is_finite() || max_step < self.initial_step {
            return Err(ConfigError::MaxStep);
        }

        Ok(Self {
            max_step: Some(max_step),
            ..self
        })
    }

    /// Returns the step size of the first attempt.
    #[must_use]
    pub fn initial_step(&self) -> f64 {
        self.initial_step
    }

    /// Returns the maximum number of accepted steps.
    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Returns the local error tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the integration boundary.
    #[must_use]
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Returns the step-size ceiling, if any.
    #[must_use]
    pub fn max_step(&self) -> Option<f64> {
        self.max_step
    }
}
