use super::{Statistics, Trajectory};

/// Indicates how the solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Took the maximum number of steps before reaching the boundary.
    StepBudgetExhausted,

    /// Reached the boundary to within its precision.
    ReachedBoundary,

    /// The step size became too small to advance `x`.
    StepSizeUnderflow,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of an RK3 integration.
#[derive(Debug, Clone)]
pub struct Solution {
    /// How the solver terminated.
    pub status: Status,

    /// Every accepted sample, starting with the start point.
    pub trajectory: Trajectory,

    /// Step-size counters and extremal samples.
    pub stats: Statistics,

    /// Number of accepted steps.
    pub steps: usize,
}
