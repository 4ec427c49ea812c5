use coil_core::{Point, ScalarOde};
use uom::si::{
    angular_velocity::radian_per_second,
    electric_potential::volt,
    electrical_resistance::ohm,
    f64::{AngularVelocity, ElectricPotential, ElectricalResistance, Inductance},
    inductance::henry,
};

use crate::CircuitError;

/// A series RL circuit driven by a sinusoidal source.
///
/// All values are in SI units: volts, radians per second, henries, and ohms.
/// The inductance is guaranteed non-zero and every constant finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circuit {
    pub(crate) emf: f64,
    pub(crate) frequency: f64,
    pub(crate) inductance: f64,
    pub(crate) resistance: f64,
}

impl Circuit {
    /// Creates a circuit from source amplitude `E0`, angular frequency `w`,
    /// inductance `L`, and resistance `R`.
    ///
    /// # Errors
    ///
    /// Returns an error if any constant is non-finite or `L` is zero.
    pub fn new(
        emf: f64,
        frequency: f64,
        inductance: f64,
        resistance: f64,
    ) -> Result<Self, CircuitError> {
        for (name, value) in [
            ("emf", emf),
            ("frequency", frequency),
            ("inductance", inductance),
            ("resistance", resistance),
        ] {
            if !value.is_finite() {
                return Err(CircuitError::NonFinite(name));
            }
        }
        if inductance == 0.0 {
            return Err(CircuitError::ZeroInductance);
        }

        Ok(Self {
            emf,
            frequency,
            inductance,
            resistance,
        })
    }

    /// Creates a circuit from dimensioned quantities.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Circuit::new`].
    pub fn from_quantities(
        emf: ElectricPotential,
        frequency: AngularVelocity,
        inductance: Inductance,
        resistance: ElectricalResistance,
    ) -> Result<Self, CircuitError> {
        Self::new(
            emf.get::<volt>(),
            frequency.get::<radian_per_second>(),
            inductance.get::<henry>(),
            resistance.get::<ohm>(),
        )
    }

    /// Source amplitude `E0` in volts.
    #[must_use]
    pub fn emf(&self) -> f64 {
        self.emf
    }

    /// Source angular frequency `w` in radians per second.
    #[must_use]
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Inductance `L` in henries.
    #[must_use]
    pub fn inductance(&self) -> f64 {
        self.inductance
    }

    /// Resistance `R` in ohms.
    #[must_use]
    pub fn resistance(&self) -> f64 {
        self.resistance
    }

    /// Rate of change of current, `sin(w·x)·E0/L − R·I/L`.
    #[must_use]
    pub fn slope(&self, x: f64, current: f64) -> f64 {
        (self.frequency * x).sin() * self.emf / self.inductance
            - self.resistance * current / self.inductance
    }
}

impl ScalarOde for Circuit {
    fn derivative(&self, x: f64, y: f64) -> f64 {
        self.slope(x, y)
    }

    fn exact(&self, start: Point, x: f64) -> Option<f64> {
        Some(self.exact_current(start, x))
    }
}
