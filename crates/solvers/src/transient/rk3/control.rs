use coil_core::ScalarOde;

use super::{Config, Estimate, step};

/// How the step size was adjusted for an accepted step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Error within `[eps/16, eps]`; the step size is kept.
    Hold,

    /// Error below `eps/16`; the step was accepted and the next one doubled.
    Grow,

    /// Error above `eps`; the step was halved and retaken without re-estimating.
    Shrink,

    /// The step was halved to stay within the integration boundary.
    Clamp,
}

impl Adjustment {
    /// Returns `true` if this counts as a step-size increase.
    #[must_use]
    pub fn is_increase(self) -> bool {
        matches!(self, Self::Grow)
    }

    /// Returns `true` if this counts as a step-size decrease.
    #[must_use]
    pub fn is_decrease(self) -> bool {
        matches!(self, Self::Shrink | Self::Clamp)
    }
}

/// Which tolerance band a local error estimate falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Band {
    Below,
    Within,
    Above,
}

impl Band {
    /// NaN estimates compare false everywhere and land in `Within`.
    fn of(local_error: f64, tolerance: f64) -> Self {
        let magnitude = local_error.abs();
        if magnitude > tolerance {
            Self::Above
        } else if magnitude < tolerance / 16.0 {
            Self::Below
        } else {
            Self::Within
        }
    }
}

/// The accepted outcome of one step attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Decision {
    pub adjustment: Adjustment,

    /// Step size actually taken.
    pub step: f64,

    /// Accepted value of `y` at `x + step`.
    pub current: f64,

    /// Step size for the next attempt.
    pub next_step: f64,
}

/// Step-size policy driven by the local error estimate.
#[derive(Debug, Clone, Copy)]
pub(super) struct Controller {
    tolerance: f64,
    max_step: Option<f64>,
}

impl Controller {
    pub(super) fn new(config: &Config) -> Self {
        Self {
            tolerance: config.tolerance(),
            max_step: config.max_step(),
        }
    }

    /// Decides how to accept a step of size `h` from `(x, y)`.
    ///
    /// A clamped step is always taken at `h` and bypasses the error bands.
    pub(super) fn decide<F: ScalarOde + ?Sized>(
        &self,
        ode: &F,
        x: f64,
        y: f64,
        h: f64,
        estimate: &Estimate,
        clamped: bool,
    ) -> Decision {
        let keep = |adjustment| Decision {
            adjustment,
            step: h,
            current: estimate.full,
            next_step: h,
        };

        if clamped {
            return keep(Adjustment::Clamp);
        }

        match Band::of(estimate.local_error, self.tolerance) {
            Band::Within => keep(Adjustment::Hold),
            Band::Below => match self.grown(h) {
                Some(next_step) => Decision {
                    next_step,
                    ..keep(Adjustment::Grow)
                },
                None => keep(Adjustment::Hold),
            },
            Band::Above => {
                let halved = h / 2.0;
                Decision {
                    adjustment: Adjustment::Shrink,
                    step: halved,
                    current: step(ode, x, y, halved),
                    next_step: halved,
                }
            }
        }
    }

    /// Doubled step size, or `None` if the ceiling leaves no room to grow.
    fn grown(&self, h: f64) -> Option<f64> {
        let doubled = 2.0 * h;
        let grown = self.max_step.map_or(doubled, |max| doubled.min(max));
        (grown > h).then_some(grown)
    }
}
