use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Physical constants
// ---------------------------------------------------------------------------

pub const G0: f64 = 9.81; // gravity, m/s^2

// ---------------------------------------------------------------------------
// Simulation state
// ---------------------------------------------------------------------------

/// Vertical flight state at a single point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub time: f64,     // s since ignition
    pub altitude: f64, // m above the pad
    pub velocity: f64, // m/s, positive up
    pub mass: f64,     // kg
}

impl State {
    /// On the pad at ignition.
    pub fn liftoff(mass: f64) -> Self {
        Self {
            time: 0.0,
            altitude: 0.0,
            velocity: 0.0,
            mass,
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub dt: f64,             // integration timestep, s
    pub max_time: f64,       // simulated-time safety bound, s
    pub rail_height: f64,    // launch guide length, m
    pub floor_altitude: f64, // abort below this altitude, m
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.001,             // 1 kHz
            max_time: 300.0,       // 5 min ceiling
            rail_height: 2.0,
            floor_altitude: -10.0,
        }
    }
}
