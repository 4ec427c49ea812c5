use coil_core::Observer;
use log::warn;

use crate::traits::{CanStopEarly, HasPosition, HasStepSize};

/// An observer that stops a run once the step size falls below a floor.
///
/// The adaptive solvers impose no lower bound on the step size. Attach this
/// observer to end a run whose steps have collapsed, instead of letting it
/// spend the whole step budget on negligible progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepFloor {
    min_step: f64,
    tripped_at: Option<f64>,
}

impl StepFloor {
    /// Creates a guard that stops the run when a step is smaller than `min_step`.
    ///
    /// A non-positive or NaN `min_step` never trips.
    #[must_use]
    pub fn new(min_step: f64) -> Self {
        Self {
            min_step,
            tripped_at: None,
        }
    }

    /// Returns the position of the step that tripped the guard, if any.
    #[must_use]
    pub fn tripped_at(&self) -> Option<f64> {
        self.tripped_at
    }
}

impl<E, A> Observer<E, A> for StepFloor
where
    E: HasPosition + HasStepSize,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let h = event.step_size()?;
        if h >= self.min_step || self.min_step.is_nan() {
            return None;
        }

        let x = event.x();
        warn!("step size {h:e} at x = {x} fell below {:e}", self.min_step);
        self.tripped_at = Some(x);
        Some(A::stop_early())
    }
}
