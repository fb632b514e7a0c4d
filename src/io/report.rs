use std::io::{self, Write};

use crate::motor::{MotorProfile, SampledMotor};
use crate::sim::{Outcome, SimulationResult};
use crate::vehicle::Vehicle;

const RULE_WIDTH: usize = 60;

/// Write the human-readable flight report.
pub fn write_report<W: Write>(
    w: &mut W,
    motor: &MotorProfile,
    vehicle: &Vehicle,
    result: &SimulationResult,
) -> io::Result<()> {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    writeln!(w, "{}", heavy)?;
    writeln!(w, "ROCKET FLIGHT SIMULATION RESULTS")?;
    writeln!(w, "{}", heavy)?;
    match motor.impulse_class() {
        Some(class) => writeln!(w, "Motor:                     {} (class {})", motor.name(), class)?,
        None => writeln!(w, "Motor:                     {}", motor.name())?,
    }
    if let MotorProfile::Sampled(SampledMotor { header: Some(h), .. }) = motor {
        writeln!(
            w,
            "Motor size:                {:.0} x {:.0} mm, delays {}{}",
            h.diameter_mm,
            h.length_mm,
            h.delays,
            h.manufacturer.as_deref().map(|m| format!(" ({})", m)).unwrap_or_default()
        )?;
    }
    writeln!(w, "Average thrust:            {:.2} N", motor.average_thrust())?;
    writeln!(w, "Total impulse:             {:.2} N·s", motor.total_impulse())?;
    writeln!(w, "Burn time:                 {:.3} s", motor.burn_time())?;
    writeln!(w, "Propellant mass:           {:.3} kg", motor.propellant_mass())?;
    writeln!(
        w,
        "Initial / final mass:      {:.3} / {:.3} kg",
        vehicle.total_mass,
        vehicle.final_mass()
    )?;
    writeln!(w, "{}", light)?;

    match result.outcome {
        Outcome::Apogee => {
            writeln!(w, "Apogee:                    {:.2} m", result.apogee_altitude())?;
            writeln!(w, "Time to apogee:            {:.2} s", result.time_to_apogee())?;
        }
        Outcome::Aborted(_) => {
            writeln!(w, "Apogee:                    not reached ({})", result.outcome)?;
        }
    }
    writeln!(w, "Velocity at 2 m (rail):    {:.2} m/s", result.rail_velocity())?;
    writeln!(w, "Time at 2 m:               {:.3} s", result.rail_time())?;
    writeln!(w, "Max velocity:              {:.2} m/s", result.max_velocity())?;
    writeln!(w, "{}", heavy)?;
    Ok(())
}
