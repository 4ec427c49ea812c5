use super::Sample;

/// Event emitted by the RK3 solver for each accepted sample.
///
/// Step 0 is the start point before any integration.
/// Steps 1..N are emitted after each accepted step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step number (0 for the start point).
    pub step: usize,

    /// The sample just appended to the trajectory.
    pub sample: &'a Sample,

    /// Step size the solver will attempt next.
    pub next_step: f64,
}
