use log::{debug, info, warn};

use crate::dynamics::state::{SimConfig, State};
use crate::motor::MotorProfile;
use crate::vehicle::Vehicle;
use super::event::{
    ApogeeDetector, EventDetector, EventKind, RailDepartureDetector, SafetyBounds,
};
use super::integrator::euler_step;
use super::result::{FlightEvent, Outcome, Sample, SimulationResult};

// ---------------------------------------------------------------------------
// Ascent simulation
// ---------------------------------------------------------------------------

fn event_at(state: &State) -> FlightEvent {
    FlightEvent {
        time: state.time,
        altitude: state.altitude,
        velocity: state.velocity,
    }
}

/// Simulate the ascent from ignition until apogee or a safety bound.
///
/// Every step is recorded in the series, starting with the pad state at
/// t = 0. The run is a single deterministic pass with fixed `config.dt`.
pub fn simulate(vehicle: &Vehicle, motor: &MotorProfile, config: &SimConfig) -> SimulationResult {
    debug!(
        "simulating '{}': m0={:.3} kg, mf={:.3} kg, burn={:.3} s, dt={} s",
        motor.name(),
        vehicle.total_mass,
        vehicle.final_mass(),
        motor.burn_time(),
        config.dt
    );

    let mut state = State::liftoff(vehicle.total_mass);

    let capacity = (config.max_time / config.dt) as usize + 1;
    let mut series = Vec::with_capacity(capacity.min(100_000));
    series.push(Sample {
        time: state.time,
        altitude: state.altitude,
        velocity: state.velocity,
        thrust: motor.thrust_at(state.time),
    });

    let mut rail = RailDepartureDetector::new(config.rail_height);
    let mut apogee_detector = ApogeeDetector;
    let mut bounds = SafetyBounds {
        max_time: config.max_time,
        floor_altitude: config.floor_altitude,
    };

    let mut rail_departure = None;
    let mut apogee = None;

    let outcome = loop {
        let (next, forces) = euler_step(&state, vehicle, motor, config.dt);
        series.push(Sample {
            time: next.time,
            altitude: next.altitude,
            velocity: next.velocity,
            thrust: forces.thrust,
        });

        if rail.check(&state, &next).is_some() {
            info!(
                "left launch guide at t={:.3} s, v={:.2} m/s",
                next.time, next.velocity
            );
            rail_departure = Some(event_at(&next));
        }

        if apogee_detector.check(&state, &next).is_some() {
            info!("apogee {:.2} m at t={:.2} s", next.altitude, next.time);
            apogee = Some(event_at(&next));
            break Outcome::Apogee;
        }

        if let Some(EventKind::Abort(reason)) = bounds.check(&state, &next) {
            warn!(
                "simulation aborted ({:?}) at t={:.3} s, h={:.2} m",
                reason, next.time, next.altitude
            );
            break Outcome::Aborted(reason);
        }

        state = next;
    };

    SimulationResult {
        outcome,
        apogee,
        rail_departure,
        series,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
