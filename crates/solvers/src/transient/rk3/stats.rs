use super::{Adjustment, Sample};

/// An extremal sample: its index in the trajectory and the tracked value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub index: usize,
    pub value: f64,
}

/// Running statistics over the accepted steps of a trajectory.
///
/// The start sample is not a step and is never tracked. Ties keep the
/// earliest index, and NaN values are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Statistics {
    increases: usize,
    decreases: usize,
    min_step: Option<Extremum>,
    max_step: Option<Extremum>,
    min_error: Option<Extremum>,
    max_error: Option<Extremum>,
}

impl Statistics {
    /// Counts an adjustment toward the cumulative totals.
    pub(super) fn count(&mut self, adjustment: Adjustment) {
        if adjustment.is_increase() {
            self.increases += 1;
        }
        if adjustment.is_decrease() {
            self.decreases += 1;
        }
    }

    /// Updates the extremal records with the sample stored at `index`.
    pub(super) fn track(&mut self, index: usize, sample: &Sample) {
        let step = sample.step;
        let error = sample.scaled_error().abs();

        update(&mut self.min_step, index, step, |new, old| new < old);
        update(&mut self.max_step, index, step, |new, old| new > old);
        update(&mut self.min_error, index, error, |new, old| new < old);
        update(&mut self.max_error, index, error, |new, old| new > old);
    }

    /// Total step-size increases.
    #[must_use]
    pub fn increases(&self) -> usize {
        self.increases
    }

    /// Total step-size decreases, including boundary clamps.
    #[must_use]
    pub fn decreases(&self) -> usize {
        self.decreases
    }

    /// Smallest step taken.
    #[must_use]
    pub fn min_step(&self) -> Option<Extremum> {
        self.min_step
    }

    /// Largest step taken.
    #[must_use]
    pub fn max_step(&self) -> Option<Extremum> {
        self.max_step
    }

    /// Smallest reported error magnitude `|8·S|`.
    #[must_use]
    pub fn min_error(&self) -> Option<Extremum> {
        self.min_error
    }

    /// Largest reported error magnitude `|8·S|`.
    #[must_use]
    pub fn max_error(&self) -> Option<Extremum> {
        self.max_error
    }
}

fn update(slot: &mut Option<Extremum>, index: usize, value: f64, better: fn(f64, f64) -> bool) {
    if value.is_nan() {
        return;
    }
    if slot.is_none_or(|current| better(value, current.value)) {
        *slot = Some(Extremum { index, value });
    }
}
