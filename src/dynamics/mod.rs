pub mod state;

use crate::motor::MotorProfile;
use crate::physics::{aerodynamics, atmosphere};
use crate::vehicle::Vehicle;
use state::{State, G0};

// ---------------------------------------------------------------------------
// Equations of motion (1DOF vertical ascent)
// ---------------------------------------------------------------------------

/// Forces acting on the vehicle at one instant, all along the vertical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Forces {
    pub mass: f64,         // kg
    pub thrust: f64,       // N, up
    pub weight: f64,       // N, down
    pub drag: f64,         // N, down (ascent only)
    pub acceleration: f64, // m/s^2, net
}

/// Evaluate the forces on `vehicle` for the given state.
///
/// Mass is taken from the depletion schedule at `state.time`, not from
/// `state.mass`.
pub fn forces(state: &State, vehicle: &Vehicle, motor: &MotorProfile) -> Forces {
    let mass = vehicle.mass_at(state.time, motor.burn_time());
    let thrust = motor.thrust_at(state.time);
    let weight = mass * G0;
    let drag = aerodynamics::drag_force(
        state.velocity,
        atmosphere::density(state.altitude),
        vehicle.drag_coefficient,
        vehicle.frontal_area(),
    );

    Forces {
        mass,
        thrust,
        weight,
        drag,
        acceleration: (thrust - weight - drag) / mass,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
