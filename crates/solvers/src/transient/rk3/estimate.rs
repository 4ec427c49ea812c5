use coil_core::ScalarOde;

use super::step;

/// Richardson denominator for a third-order method, `2³ − 1`.
const RICHARDSON: f64 = 7.0;

/// Factor applied to the local estimate for reporting, `2³`.
pub const REPORT_SCALE: f64 = 8.0;

/// Step-doubling error estimate for one attempted step.
///
/// Both branches are recomputed on every call: one full step of size `h`, and
/// two consecutive half steps of size `h/2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Result of one step of size `h`.
    pub full: f64,

    /// Result of two steps of size `h/2`.
    pub half_steps: f64,

    /// Local error estimate `S = (half_steps − full) / 7`.
    pub local_error: f64,
}

impl Estimate {
    /// Estimates the local error of a step of size `h` from `(x, y)`.
    #[must_use]
    pub fn new<F: ScalarOde + ?Sized>(ode: &F, x: f64, y: f64, h: f64) -> Self {
        let half = h / 2.0;
        let midway = step(ode, x, y, half);
        let half_steps = step(ode, x + half, midway, half);
        let full = step(ode, x, y, h);

        Self {
            full,
            half_steps,
            local_error: (half_steps - full) / RICHARDSON,
        }
    }

    /// The reported error, `8·S`.
    #[must_use]
    pub fn scaled_error(&self) -> f64 {
        REPORT_SCALE * self.local_error
    }
}
