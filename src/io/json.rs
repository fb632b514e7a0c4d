use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;

use crate::dynamics::state::G0;
use crate::motor::MotorProfile;
use crate::sim::SimulationResult;
use crate::vehicle::Vehicle;

/// Motor characteristics derived for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct MotorSummary {
    pub name: String,
    pub impulse_class: Option<String>,
    pub average_thrust_n: f64,
    pub peak_thrust_n: f64,
    pub total_impulse_ns: f64,
    pub burn_time_s: f64,
    pub propellant_mass_kg: f64,
}

impl MotorSummary {
    pub fn from_motor(motor: &MotorProfile) -> Self {
        MotorSummary {
            name: motor.name().to_string(),
            impulse_class: motor.impulse_class(),
            average_thrust_n: motor.average_thrust(),
            peak_thrust_n: motor.peak_thrust(),
            total_impulse_ns: motor.total_impulse(),
            burn_time_s: motor.burn_time(),
            propellant_mass_kg: motor.propellant_mass(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VehicleSummary {
    pub total_mass_kg: f64,
    pub final_mass_kg: f64,
    pub diameter_m: f64,
    pub drag_coefficient: f64,
    pub liftoff_twr: f64,
}

/// Summary statistics computed from a flight result.
#[derive(Debug, Clone, Serialize)]
pub struct FlightSummary {
    pub outcome: String,
    pub apogee_m: f64,
    pub apogee_time_s: f64,
    pub rail_velocity_ms: f64,
    pub rail_time_s: f64,
    pub max_velocity_ms: f64,
    pub max_accel_ms2: f64,
    pub max_accel_g: f64,
    pub burnout_altitude_m: Option<f64>,
    pub burnout_velocity_ms: Option<f64>,
    pub steps: usize,
}

impl FlightSummary {
    pub fn from_result(result: &SimulationResult, burn_time: f64) -> Self {
        let burnout = result.burnout(burn_time);
        let max_accel = result.max_acceleration();
        FlightSummary {
            outcome: result.outcome.to_string(),
            apogee_m: result.apogee_altitude(),
            apogee_time_s: result.time_to_apogee(),
            rail_velocity_ms: result.rail_velocity(),
            rail_time_s: result.rail_time(),
            max_velocity_ms: result.max_velocity(),
            max_accel_ms2: max_accel,
            max_accel_g: max_accel / G0,
            burnout_altitude_m: burnout.map(|s| s.altitude),
            burnout_velocity_ms: burnout.map(|s| s.velocity),
            steps: result.series.len().saturating_sub(1),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub motor: MotorSummary,
    pub vehicle: VehicleSummary,
    pub flight: FlightSummary,
}

impl RunSummary {
    pub fn new(motor: &MotorProfile, vehicle: &Vehicle, result: &SimulationResult) -> Self {
        RunSummary {
            motor: MotorSummary::from_motor(motor),
            vehicle: VehicleSummary {
                total_mass_kg: vehicle.total_mass,
                final_mass_kg: vehicle.final_mass(),
                diameter_m: vehicle.diameter,
                drag_coefficient: vehicle.drag_coefficient,
                liftoff_twr: vehicle.thrust_to_weight(motor.thrust_at(0.0)),
            },
            flight: FlightSummary::from_result(result, motor.burn_time()),
        }
    }
}

/// Write run summary as pretty-printed JSON.
pub fn write_summary<W: Write>(writer: &mut W, summary: &RunSummary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, summary)?;
    writeln!(writer)
}

/// Write run summary JSON to a file.
pub fn write_summary_file(path: impl AsRef<Path>, summary: &RunSummary) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_summary(&mut file, summary)?;
    file.flush()
}
