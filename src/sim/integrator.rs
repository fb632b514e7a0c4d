use crate::dynamics::{self, state::State, Forces};
use crate::motor::MotorProfile;
use crate::vehicle::Vehicle;

// ---------------------------------------------------------------------------
// Semi-implicit Euler step
// ---------------------------------------------------------------------------

/// Advance `state` by `dt`: velocity first, then altitude with the updated
/// velocity. Returns the new state and the forces evaluated at the start of
/// the step.
pub fn euler_step(
    state: &State,
    vehicle: &Vehicle,
    motor: &MotorProfile,
    dt: f64,
) -> (State, Forces) {
    let f = dynamics::forces(state, vehicle, motor);

    let velocity = state.velocity + f.acceleration * dt;
    let altitude = state.altitude + velocity * dt;
    let time = state.time + dt;

    let next = State {
        time,
        altitude,
        velocity,
        mass: vehicle.mass_at(time, motor.burn_time()),
    };
    (next, f)
}
