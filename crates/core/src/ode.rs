use crate::Point;

/// A first-order scalar ordinary differential equation `dy/dx = f(x, y)`.
///
/// Implementors provide the right-hand side. Solvers only ever call
/// [`derivative`](ScalarOde::derivative) to advance the state; the exact
/// solution hook is used for diagnostics and never influences stepping.
pub trait ScalarOde {
    /// Evaluates `f(x, y)`.
    ///
    /// Must be pure. Non-finite results are not guarded and propagate into
    /// whatever the solver produces.
    fn derivative(&self, x: f64, y: f64) -> f64;

    /// Evaluates the closed-form solution through `start` at `x`, if known.
    ///
    /// The default returns `None`. Implementations must satisfy
    /// `exact(start, start.x) == Some(start.y)` up to rounding.
    fn exact(&self, _start: Point, _x: f64) -> Option<f64> {
        None
    }
}

impl<T: ScalarOde + ?Sized> ScalarOde for &T {
    fn derivative(&self, x: f64, y: f64) -> f64 {
        (**self).derivative(x, y)
    }

    fn exact(&self, start: Point, x: f64) -> Option<f64> {
        (**self).exact(start, x)
    }
}
