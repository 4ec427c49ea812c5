use coil_core::ScalarOde;

/// Advances `y` from `x` by one explicit third-order Runge-Kutta step of size `h`.
///
/// ```text
/// k1 = f(x, y)
/// k2 = f(x + h/2, y + h·k1/2)
/// k3 = f(x + h, y + h·(2·k2 − k1))
/// y' = y + h·(k1 + 4·k2 + k3)/6
/// ```
#[must_use]
pub fn step<F: ScalarOde + ?Sized>(ode: &F, x: f64, y: f64, h: f64) -> f64 {
    let k1 = ode.derivative(x, y);
    let k2 = ode.derivative(x + h / 2.0, y + h * k1 / 2.0);
    let k3 = ode.derivative(x + h, y + h * (2.0 * k2 - k1));
    y + h * (k1 + 4.0 * k2 + k3) / 6.0
}
