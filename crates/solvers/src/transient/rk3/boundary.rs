use super::ConfigError;

/// Upper bound on the independent variable and the tolerance for reaching it.
///
/// Integration stops once `x` lies within `precision` of `x_end`. A step that
/// would cross `x_end` is halved until it no longer does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    x_end: f64,
    precision: f64,
}

impl Boundary {
    /// Creates a boundary at `x_end` with snapping tolerance `precision`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x_end` is non-finite or `precision` is negative or
    /// non-finite.
    pub fn new(x_end: f64, precision: f64) -> Result<Self, ConfigError> {
        if !x_end.is_finite() {
            return Err(ConfigError::BoundaryEnd);
        }
        if !precision.is_finite() || precision < 0.0 {
            return Err(ConfigError::BoundaryPrecision);
        }

        Ok(Self { x_end, precision })
    }

    /// Returns the upper bound on `x`.
    #[must_use]
    pub fn x_end(&self) -> f64 {
        self.x_end
    }

    /// Returns the snapping tolerance.
    #[must_use]
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Returns `true` once `x` is within `precision` of the end, or past it.
    #[must_use]
    pub fn is_reached(&self, x: f64) -> bool {
        x > self.x_end - self.precision || x >= self.x_end
    }

    /// Returns the halved step size if a step of `h` from `x` would overshoot.
    ///
    /// `None` means the step fits, or the boundary is already reached and no
    /// further step should be taken.
    #[must_use]
    pub fn clamp(&self, x: f64, h: f64) -> Option<f64> {
        if x + h <= self.x_end || self.is_reached(x) {
            return None;
        }

        let mut h = h;
        while x + h > self.x_end {
            h /= 2.0;
        }
        Some(h)
    }
}
