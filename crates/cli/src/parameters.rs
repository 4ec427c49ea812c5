use std::{
    fs,
    path::{Path, PathBuf},
};

use coil_circuit::{Circuit, CircuitError};
use coil_core::Point;
use coil_solvers::transient::rk3::{Boundary, Config, ConfigError};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading or applying a parameter file.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported parameter file {0}: expected .toml, .yaml, or .yml")]
    UnknownFormat(PathBuf),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid circuit: {0}")]
    Circuit(#[from] CircuitError),

    #[error("invalid solver settings: {0}")]
    Config(#[from] ConfigError),
}

/// Parameter file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Yaml,
}

impl Format {
    fn of(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Every input of a run, in the units of the circuit model.
///
/// Fields missing from a parameter file keep their default value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Parameters {
    pub x0: f64,
    pub i0: f64,
    pub inductance: f64,
    pub resistance: f64,
    pub emf: f64,
    pub frequency: f64,
    pub h0: f64,

    /// Step budget; negative values are treated as zero.
    pub steps: i64,

    pub eps: f64,
    pub xmax: f64,
    pub prec: f64,

    /// Optional ceiling on the step size.
    pub max_step: Option<f64>,

    /// Optional floor below which the run is stopped.
    pub min_step: Option<f64>,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            x0: 0.0,
            i0: 0.0,
            inductance: 0.5,
            resistance: 60.0,
            emf: 4.0,
            frequency: 6.0,
            h0: 0.001,
            steps: 5000,
            eps: 1e-5,
            xmax: 1.0,
            prec: 1e-4,
            max_step: None,
            min_step: None,
        }
    }
}

impl Parameters {
    /// Reads parameters from a `.toml`, `.yaml`, or `.yml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not recognized, the file cannot
    /// be read, or its contents do not parse.
    pub fn load(path: &Path) -> Result<Self, ParameterError> {
        let format =
            Format::of(path).ok_or_else(|| ParameterError::UnknownFormat(path.to_path_buf()))?;
        let text = fs::read_to_string(path).map_err(|source| ParameterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, format)
    }

    /// Parses parameters from text in the given format.
    ///
    /// # Errors
    ///
    /// Returns an error if the text does not parse.
    pub fn parse(text: &str, format: Format) -> Result<Self, ParameterError> {
        Ok(match format {
            Format::Toml => toml::from_str(text)?,
            Format::Yaml => serde_yaml::from_str(text)?,
        })
    }

    /// Builds the circuit.
    ///
    /// # Errors
    ///
    /// Returns an error if a coefficient is non-finite or the inductance is zero.
    pub fn circuit(&self) -> Result<Circuit, ParameterError> {
        Ok(Circuit::new(
            self.emf,
            self.frequency,
            self.inductance,
            self.resistance,
        )?)
    }

    #[must_use]
    pub fn start(&self) -> Point {
        Point::new(self.x0, self.i0)
    }

    /// Builds the solver configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a step size, tolerance, or boundary value is invalid.
    pub fn config(&self) -> Result<Config, ParameterError> {
        let steps = usize::try_from(self.steps.max(0)).unwrap_or(usize::MAX);
        let boundary = Boundary::new(self.xmax, self.prec)?;
        let config = Config::new(self.h0, steps, self.eps, boundary)?;
        Ok(match self.max_step {
            Some(max) => config.with_max_step(max)?,
            None => config,
        })
    }
}
