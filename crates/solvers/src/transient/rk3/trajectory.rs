use std::ops::Index;

use coil_core::Point;

use super::{Adjustment, estimate::REPORT_SCALE};

/// One accepted point on the trajectory with its step diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Independent variable.
    pub x: f64,

    /// Accepted value of the dependent variable.
    pub current: f64,

    /// Two-half-step estimate at `x - step + attempted`.
    ///
    /// This is the point at `x` unless the step was halved after a failed
    /// estimate, in which case it lies one halved step beyond `x`.
    pub half_steps: f64,

    /// Step size actually taken to reach `x` (zero for the start point).
    pub step: f64,

    /// Step size the error estimate was computed at.
    ///
    /// Equal to `step` unless the step was halved after a failed estimate.
    pub attempted: f64,

    /// Local error estimate `S`.
    pub estimate: f64,

    /// Step-size adjustment applied (`None` for the start point).
    pub adjustment: Option<Adjustment>,

    /// Cumulative step-size increases up to and including this sample.
    pub increases: usize,

    /// Cumulative step-size decreases up to and including this sample.
    pub decreases: usize,

    /// Closed-form value at `x`, if the ODE provides one.
    pub exact: Option<f64>,
}

impl Sample {
    /// Creates the sample for the start point.
    pub(super) fn start(point: Point, exact: Option<f64>) -> Self {
        Self {
            x: point.x,
            current: point.y,
            half_steps: point.y,
            step: 0.0,
            attempted: 0.0,
            estimate: 0.0,
            adjustment: None,
            increases: 0,
            decreases: 0,
            exact,
        }
    }

    /// Returns `(x, current)` as a point.
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.current)
    }

    /// The reported error, `8·S`.
    #[must_use]
    pub fn scaled_error(&self) -> f64 {
        REPORT_SCALE * self.estimate
    }

    /// Absolute difference between the closed-form and accepted values.
    #[must_use]
    pub fn global_error(&self) -> Option<f64> {
        self.exact.map(|exact| (exact - self.current).abs())
    }
}

/// The ordered record of accepted samples, starting with the start point.
///
/// A trajectory is never empty, and `x` never decreases from one sample to
/// the next. It is only extended by the solver.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<Sample>,
}

impl Trajectory {
    pub(super) fn new(start: Sample, capacity: usize) -> Self {
        let mut samples = Vec::with_capacity(capacity);
        samples.push(start);
        Self { samples }
    }

    pub(super) fn push(&mut self, sample: Sample) {
        debug_assert!(
            !(sample.x < self.last().x),
            "samples must be pushed in order of x"
        );
        self.samples.push(sample);
    }

    /// Returns the number of samples, including the start point.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false`: a trajectory holds at least the start point.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the start sample.
    #[must_use]
    pub fn first(&self) -> &Sample {
        &self.samples[0]
    }

    /// Returns the most recent sample.
    #[must_use]
    pub fn last(&self) -> &Sample {
        &self.samples[self.samples.len() - 1]
    }

    /// Returns the sample at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// Returns the samples as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }

    /// Iterates over the samples in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Iterates over `(x, current)` points in order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.samples.iter().map(Sample::point)
    }
}

impl Index<usize> for Trajectory {
    type Output = Sample;

    fn index(&self, index: usize) -> &Sample {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
