//! Plain-text rendering of RK3 results.
//!
//! [`Table`] lays out one row per trajectory sample, and [`Summary`] reports
//! how a run ended along with its step-size statistics. Both implement
//! [`Display`](fmt::Display), so they can be printed or written anywhere.
//!
//! ```ignore
//! let solution = rk3::solve_unobserved(&circuit, start, &config)?;
//! println!("{}", Table::new(&solution.trajectory));
//! println!("{}", Summary::new(&solution));
//! ```

use std::fmt;

use coil_solvers::transient::rk3::{Adjustment, Extremum, Solution, Status, Trajectory};

const HEADER: [&str; 10] = [
    "i", "h", "x", "I", "I_half", "exact", "|exact-I|", "8S", "inc", "dec",
];

/// One row per sample: index, step, position, both estimates, the closed-form
/// value and its deviation, the reported error, and the cumulative counters.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    trajectory: &'a Trajectory,
}

impl<'a> Table<'a> {
    #[must_use]
    pub fn new(trajectory: &'a Trajectory) -> Self {
        Self { trajectory }
    }
}

impl fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [i, h, x, y, half, exact, diff, err, inc, dec] = HEADER;
        writeln!(
            f,
            "{i:>6} {h:>11} {x:>13} {y:>13} {half:>13} {exact:>13} {diff:>11} {err:>11} {inc:>5} {dec:>5}"
        )?;

        for (index, sample) in self.trajectory.iter().enumerate() {
            write!(
                f,
                "{index:>6} {:>11.4e} {:>13.6e} {:>13.6e} ",
                sample.step, sample.x, sample.current
            )?;
            // After a shrink the two-half-step value belongs to the attempted step.
            if sample.adjustment == Some(Adjustment::Shrink) {
                write!(f, "{:>13} ", "-")?;
            } else {
                write!(f, "{:>13.6e} ", sample.half_steps)?;
            }
            match (sample.exact, sample.global_error()) {
                (Some(exact), Some(diff)) => write!(f, "{exact:>13.6e} {diff:>11.4e} ")?,
                _ => write!(f, "{:>13} {:>11} ", "-", "-")?,
            }
            writeln!(
                f,
                "{:>11.4e} {:>5} {:>5}",
                sample.scaled_error(),
                sample.increases,
                sample.decreases
            )?;
        }
        Ok(())
    }
}

/// How a run ended, with its step counters and extremal samples.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    solution: &'a Solution,
}

impl<'a> Summary<'a> {
    #[must_use]
    pub fn new(solution: &'a Solution) -> Self {
        Self { solution }
    }

    fn extremum(
        &self,
        f: &mut fmt::Formatter<'_>,
        label: &str,
        extremum: Option<Extremum>,
    ) -> fmt::Result {
        match extremum {
            Some(Extremum { index, value }) => {
                let x = self.solution.trajectory[index].x;
                writeln!(f, "{label:<15} {value:.4e} at x = {x:.6e} (step {index})")
            }
            None => writeln!(f, "{label:<15} -"),
        }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solution = self.solution;
        let status = match solution.status {
            Status::StepBudgetExhausted => "step budget exhausted",
            Status::ReachedBoundary => "reached boundary",
            Status::StepSizeUnderflow => "step size underflow",
            Status::StoppedByObserver => "stopped by observer",
        };
        let stats = &solution.stats;

        writeln!(f, "{:<15} {status}", "status")?;
        writeln!(f, "{:<15} {}", "steps", solution.steps)?;
        writeln!(f, "{:<15} {:.6e}", "final x", solution.trajectory.last().x)?;
        writeln!(f, "{:<15} {}", "increases", stats.increases())?;
        writeln!(f, "{:<15} {}", "decreases", stats.decreases())?;
        self.extremum(f, "min step", stats.min_step())?;
        self.extremum(f, "max step", stats.max_step())?;
        self.extremum(f, "min error", stats.min_error())?;
        self.extremum(f, "max error", stats.max_error())
    }
}
