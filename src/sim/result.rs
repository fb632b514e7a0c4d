use std::fmt;

use serde::Serialize;

use super::event::AbortReason;

// ---------------------------------------------------------------------------
// Simulation output
// ---------------------------------------------------------------------------

/// One recorded point of the flight series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sample {
    pub time: f64,     // s
    pub altitude: f64, // m
    pub velocity: f64, // m/s
    pub thrust: f64,   // N
}

/// Flight state captured when an event fired.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlightEvent {
    pub time: f64,
    pub altitude: f64,
    pub velocity: f64,
}

/// Terminal state of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Apogee,
    Aborted(AbortReason),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Apogee => f.write_str("apogee reached"),
            Outcome::Aborted(AbortReason::TimeLimit) => f.write_str("aborted: time limit exceeded"),
            Outcome::Aborted(AbortReason::BelowFloor) => f.write_str("aborted: fell below launch pad"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationResult {
    pub outcome: Outcome,
    pub apogee: Option<FlightEvent>,
    pub rail_departure: Option<FlightEvent>,
    pub series: Vec<Sample>,
}

impl SimulationResult {
    pub fn reached_apogee(&self) -> bool {
        self.outcome == Outcome::Apogee
    }

    /// Apogee altitude, m. Zero for aborted runs.
    pub fn apogee_altitude(&self) -> f64 {
        self.apogee.map_or(0.0, |e| e.altitude)
    }

    /// Time to apogee, s. Zero for aborted runs.
    pub fn time_to_apogee(&self) -> f64 {
        self.apogee.map_or(0.0, |e| e.time)
    }

    /// Velocity on leaving the launch guide, m/s. Zero if never reached.
    pub fn rail_velocity(&self) -> f64 {
        self.rail_departure.map_or(0.0, |e| e.velocity)
    }

    /// Time of leaving the launch guide, s. Zero if never reached.
    pub fn rail_time(&self) -> f64 {
        self.rail_departure.map_or(0.0, |e| e.time)
    }

    pub fn max_velocity(&self) -> f64 {
        self.series.iter().map(|s| s.velocity).fold(0.0_f64, f64::max)
    }

    /// Peak acceleration from the recorded series (finite differences).
    pub fn max_acceleration(&self) -> f64 {
        self.series
            .windows(2)
            .map(|w| {
                let dt = w[1].time - w[0].time;
                if dt > 0.0 {
                    (w[1].velocity - w[0].velocity) / dt
                } else {
                    0.0
                }
            })
            .fold(0.0_f64, f64::max)
    }

    /// First recorded sample at or after `burn_time`.
    pub fn burnout(&self, burn_time: f64) -> Option<&Sample> {
        self.series.iter().find(|s| s.time >= burn_time)
    }
}
