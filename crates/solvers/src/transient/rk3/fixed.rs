//! Fixed-step RK3 without error control.

use coil_core::{Point, ScalarOde};

use super::step;

/// Advances from `start` by `steps` RK3 steps of constant size `h`.
///
/// Returns every point including `start`. There is no error estimate and no
/// boundary; `x` simply advances by `h` each step.
#[must_use]
pub fn solve<F: ScalarOde + ?Sized>(ode: &F, start: Point, h: f64, steps: usize) -> Vec<Point> {
    let mut points = Vec::with_capacity(steps.saturating_add(1));
    points.push(start);

    let mut current = start;
    for _ in 0..steps {
        let y = step(ode, current.x, current.y, h);
        current = Point::new(current.x + h, y);
        points.push(current);
    }

    points
}
