//! Run configuration: motor source, vehicle parameters and integrator
//! settings, loadable from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dynamics::state::SimConfig;
use crate::motor::{EngFile, MotorFileError, MotorProfile};
use crate::vehicle::{Vehicle, VehicleBuilder};

/// Errors that can occur while loading or validating a run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Everything needed for one simulation run.
///
/// When `engine_file` is set the motor comes from that RASP file and the
/// `manual_*` values are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    pub engine_file: Option<PathBuf>,
    pub manual_thrust: f64,          // N
    pub manual_burn_time: f64,       // s
    pub manual_propellant_mass: f64, // kg
    pub rocket_mass_empty: f64,      // kg, without propellant
    pub diameter: f64,               // m
    pub drag_coefficient: f64,
    pub simulation: SimConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            engine_file: None,
            manual_thrust: 105.0,
            manual_burn_time: 115.0 / 105.0,
            manual_propellant_mass: 0.130,
            rocket_mass_empty: 0.910,
            diameter: 0.060,
            drag_coefficient: 0.9,
            simulation: SimConfig::default(),
        }
    }
}

/// Where the thrust profile comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotorSource<'a> {
    File(&'a Path),
    Manual {
        thrust: f64,
        burn_time: f64,
        propellant_mass: f64,
    },
}

fn require(ok: bool, field: &'static str, reason: &str) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::Invalid { field, reason: reason.to_string() })
    }
}

impl RunConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Load a TOML config. A relative `engine_file` is resolved against the
    /// config file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&contents)?;
        if let (Some(engine), Some(dir)) = (config.engine_file.as_mut(), path.parent()) {
            if engine.is_relative() {
                *engine = dir.join(&*engine);
            }
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        require(
            self.rocket_mass_empty.is_finite() && self.rocket_mass_empty > 0.0,
            "rocket_mass_empty",
            "must be a positive mass",
        )?;
        require(
            self.diameter.is_finite() && self.diameter > 0.0,
            "diameter",
            "must be positive",
        )?;
        require(
            self.drag_coefficient.is_finite() && self.drag_coefficient >= 0.0,
            "drag_coefficient",
            "must not be negative",
        )?;

        let sim = &self.simulation;
        require(sim.dt.is_finite() && sim.dt > 0.0, "simulation.dt", "must be positive")?;
        require(
            sim.max_time.is_finite() && sim.max_time > 0.0,
            "simulation.max_time",
            "must be positive",
        )?;
        require(sim.rail_height.is_finite(), "simulation.rail_height", "must be finite")?;
        require(
            sim.floor_altitude.is_finite() && sim.floor_altitude < 0.0,
            "simulation.floor_altitude",
            "must be below the pad",
        )?;

        if self.engine_file.is_none() {
            require(
                self.manual_thrust.is_finite() && self.manual_thrust >= 0.0,
                "manual_thrust",
                "must not be negative",
            )?;
            require(
                self.manual_burn_time.is_finite() && self.manual_burn_time >= 0.0,
                "manual_burn_time",
                "must not be negative",
            )?;
            require(
                self.manual_propellant_mass.is_finite() && self.manual_propellant_mass >= 0.0,
                "manual_propellant_mass",
                "must not be negative",
            )?;
        }
        Ok(())
    }

    pub fn motor_source(&self) -> MotorSource<'_> {
        match &self.engine_file {
            Some(path) => MotorSource::File(path),
            None => MotorSource::Manual {
                thrust: self.manual_thrust,
                burn_time: self.manual_burn_time,
                propellant_mass: self.manual_propellant_mass,
            },
        }
    }

    /// Build the motor profile, reading the motor file if one is configured.
    pub fn load_motor(&self) -> Result<MotorProfile, MotorFileError> {
        match self.motor_source() {
            MotorSource::File(path) => Ok(MotorProfile::from_eng(EngFile::load(path)?)),
            MotorSource::Manual { thrust, burn_time, propellant_mass } => Ok(
                MotorProfile::constant("Custom", thrust, burn_time, propellant_mass),
            ),
        }
    }

    /// Vehicle at liftoff: empty rocket plus the motor's propellant.
    pub fn build_vehicle(&self, motor: &MotorProfile) -> Vehicle {
        VehicleBuilder::new(self.rocket_mass_empty)
            .motor(motor)
            .diameter(self.diameter)
            .drag_coefficient(self.drag_coefficient)
            .build()
    }
}
