use coil_core::Point;

use crate::Circuit;

impl Circuit {
    /// Steady-state (particular) response `E0·(R·sin(w·x) − L·w·cos(w·x)) / (L²·w² + R²)`.
    ///
    /// Zero when the denominator vanishes, which only happens for an undriven,
    /// lossless circuit (`w = 0`, `R = 0`).
    fn steady_state(&self, x: f64) -> f64 {
        let Self {
            emf: e0,
            frequency: w,
            inductance: l,
            resistance: r,
        } = *self;

        let denominator = l * l * w * w + r * r;
        if denominator == 0.0 {
            return 0.0;
        }

        e0 * (r * (w * x).sin() - l * w * (w * x).cos()) / denominator
    }

    /// Evaluates the analytic current at `x` for the trajectory through `start`.
    ///
    /// ```text
    /// I(x) = p(x) + (I0 − p(x0))·e^(−R·(x − x0)/L)
    /// ```
    ///
    /// where `p` is the steady-state response. With `x0 = 0` this reduces to
    /// `E0·(R·sin(w·x) − L·w·cos(w·x) + L·w·e^(−R·x/L)) / (L²·w² + R²) + I0·e^(−R·x/L)`.
    #[must_use]
    pub fn exact_current(&self, start: Point, x: f64) -> f64 {
        let decay = (-self.resistance * (x - start.x) / self.inductance).exp();
        self.steady_state(x) + (start.y - self.steady_state(start.x)) * decay
    }
}
