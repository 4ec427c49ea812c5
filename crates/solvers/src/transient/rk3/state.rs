use coil_core::{Point, ScalarOde};

use super::{
    Config, Estimate, Sample, Statistics, Trajectory,
    control::Decision,
    solution::{Solution, Status},
};

/// Mutable solver state: the current point, the step size for the next
/// attempt, and the records being built.
pub(super) struct State {
    start: Point,
    x: f64,
    y: f64,
    h: f64,
    trajectory: Trajectory,
    stats: Statistics,
}

impl State {
    pub(super) fn new<F: ScalarOde + ?Sized>(ode: &F, start: Point, config: &Config) -> Self {
        let first = Sample::start(start, ode.exact(start, start.x));
        let capacity = config.max_steps().saturating_add(1).min(1 << 16);

        Self {
            start,
            x: start.x,
            y: start.y,
            h: config.initial_step(),
            trajectory: Trajectory::new(first, capacity),
            stats: Statistics::default(),
        }
    }

    /// Returns `(x, y, h)`: where the next attempt starts and its step size.
    pub(super) fn position(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.h)
    }

    pub(super) fn last(&self) -> &Sample {
        self.trajectory.last()
    }

    pub(super) fn next_step(&self) -> f64 {
        self.h
    }

    /// Accepts a step: appends the sample and updates the statistics together.
    pub(super) fn commit<F: ScalarOde + ?Sized>(
        &mut self,
        ode: &F,
        estimate: &Estimate,
        attempted: f64,
        decision: Decision,
    ) {
        let x = self.x + decision.step;

        self.stats.count(decision.adjustment);
        let sample = Sample {
            x,
            current: decision.current,
            half_steps: estimate.half_steps,
            step: decision.step,
            attempted,
            estimate: estimate.local_error,
            adjustment: Some(decision.adjustment),
            increases: self.stats.increases(),
            decreases: self.stats.decreases(),
            exact: ode.exact(self.start, x),
        };
        self.stats.track(self.trajectory.len(), &sample);
        self.trajectory.push(sample);

        self.x = x;
        self.y = decision.current;
        self.h = decision.next_step;
    }

    pub(super) fn into_solution(self, status: Status) -> Solution {
        Solution {
            status,
            steps: self.trajectory.len() - 1,
            trajectory: self.trajectory,
            stats: self.stats,
        }
    }
}
