//! Command-line options shared by the report and plot binaries.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, RunConfig};

#[derive(Debug, Clone, Parser)]
#[command(version, about = "Estimate the apogee of a single-stage rocket")]
pub struct Args {
    /// TOML run configuration; built-in defaults are used when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// RASP .eng motor file (overrides manual motor parameters)
    #[arg(short, long)]
    pub engine: Option<PathBuf>,

    /// Ignore any motor file and use the manual parameters
    #[arg(long, conflicts_with = "engine")]
    pub manual: bool,

    /// Manual average thrust, N
    #[arg(long)]
    pub thrust: Option<f64>,

    /// Manual burn time, s
    #[arg(long)]
    pub burn_time: Option<f64>,

    /// Manual propellant mass, kg
    #[arg(long)]
    pub propellant_mass: Option<f64>,

    /// Empty rocket mass without propellant, kg
    #[arg(long)]
    pub empty_mass: Option<f64>,

    /// Frontal diameter, m
    #[arg(long)]
    pub diameter: Option<f64>,

    /// Drag coefficient
    #[arg(long)]
    pub cd: Option<f64>,

    /// Integration timestep, s
    #[arg(long)]
    pub dt: Option<f64>,

    /// Write the flight series to this CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the run summary to this JSON file
    #[arg(long)]
    pub json: Option<PathBuf>,
}

impl Args {
    /// Resolve the effective configuration: file (or defaults), then flags.
    pub fn run_config(&self) -> Result<RunConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };

        if let Some(engine) = &self.engine {
            config.engine_file = Some(engine.clone());
        }
        if self.manual {
            config.engine_file = None;
        }
        if let Some(v) = self.thrust {
            config.manual_thrust = v;
        }
        if let Some(v) = self.burn_time {
            config.manual_burn_time = v;
        }
        if let Some(v) = self.propellant_mass {
            config.manual_propellant_mass = v;
        }
        if let Some(v) = self.empty_mass {
            config.rocket_mass_empty = v;
        }
        if let Some(v) = self.diameter {
            config.diameter = v;
        }
        if let Some(v) = self.cd {
            config.drag_coefficient = v;
        }
        if let Some(v) = self.dt {
            config.simulation.dt = v;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "rocket-apogee",
            "--thrust",
            "80",
            "--burn-time",
            "1.5",
            "--cd",
            "0.6",
            "--dt",
            "0.002",
        ]);
        let c = args.run_config().unwrap();
        assert_eq!(c.manual_thrust, 80.0);
        assert_eq!(c.manual_burn_time, 1.5);
        assert_eq!(c.drag_coefficient, 0.6);
        assert_eq!(c.simulation.dt, 0.002);
        assert!(c.engine_file.is_none());
    }

    #[test]
    fn engine_flag_selects_file_mode() {
        let args = Args::parse_from(["rocket-apogee", "--engine", "motors/F35.eng"]);
        let c = args.run_config().unwrap();
        assert_eq!(c.engine_file, Some(PathBuf::from("motors/F35.eng")));
    }

    #[test]
    fn invalid_override_is_rejected() {
        let args = Args::parse_from(["rocket-apogee", "--diameter=-0.05"]);
        assert!(args.run_config().is_err());
    }

    #[test]
    fn manual_conflicts_with_engine() {
        let res = Args::try_parse_from(["rocket-apogee", "--manual", "--engine", "x.eng"]);
        assert!(res.is_err());
    }
}
