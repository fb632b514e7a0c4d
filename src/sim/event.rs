use crate::dynamics::state::State;

// ---------------------------------------------------------------------------
// Simulation events
// ---------------------------------------------------------------------------

/// Why a run stopped without reaching apogee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// Simulated time exceeded the safety bound.
    TimeLimit,
    /// Altitude dropped below the floor (vehicle never left the pad).
    BelowFloor,
}

/// Kinds of simulation events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    RailDeparture,
    Apogee,
    Abort(AbortReason),
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive states and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind>;
}

/// Fires once, on the first state at or above the launch guide height.
pub struct RailDepartureDetector {
    pub height: f64,
    fired: bool,
}

impl RailDepartureDetector {
    pub fn new(height: f64) -> Self {
        Self { height, fired: false }
    }
}

impl EventDetector for RailDepartureDetector {
    fn check(&mut self, _prev: &State, current: &State) -> Option<EventKind> {
        if self.fired || current.altitude < self.height {
            return None;
        }
        self.fired = true;
        Some(EventKind::RailDeparture)
    }
}

/// Detects apogee: vertical velocity no longer positive while above the pad.
pub struct ApogeeDetector;

impl EventDetector for ApogeeDetector {
    fn check(&mut self, _prev: &State, current: &State) -> Option<EventKind> {
        if current.velocity <= 0.0 && current.altitude > 0.0 {
            Some(EventKind::Apogee)
        } else {
            None
        }
    }
}

/// Simulated-time and altitude bounds for non-converging runs.
pub struct SafetyBounds {
    pub max_time: f64,
    pub floor_altitude: f64,
}

impl EventDetector for SafetyBounds {
    fn check(&mut self, _prev: &State, current: &State) -> Option<EventKind> {
        if current.time > self.max_time {
            Some(EventKind::Abort(AbortReason::TimeLimit))
        } else if current.altitude < self.floor_altitude {
            Some(EventKind::Abort(AbortReason::BelowFloor))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_state(time: f64, alt: f64, vel: f64) -> State {
        State { time, altitude: alt, velocity: vel, mass: 1.0 }
    }

    #[test]
    fn rail_departure_fires_once() {
        let mut det = RailDepartureDetector::new(2.0);
        let prev = make_state(0.1, 1.9, 20.0);
        let curr = make_state(0.101, 2.0, 20.1);
        assert_eq!(det.check(&prev, &curr), Some(EventKind::RailDeparture));
        // Should not fire again
        assert!(det.check(&curr, &make_state(0.102, 2.1, 20.2)).is_none());
    }

    #[test]
    fn rail_departure_ignores_low_states() {
        let mut det = RailDepartureDetector::new(2.0);
        let s = make_state(0.05, 1.99, 10.0);
        assert!(det.check(&s, &s).is_none());
    }

    #[test]
    fn apogee_detected() {
        let mut det = ApogeeDetector;
        let prev = make_state(8.0, 300.0, 0.01);
        let curr = make_state(8.001, 300.0, -0.0);
        assert_eq!(det.check(&prev, &curr), Some(EventKind::Apogee));
    }

    #[test]
    fn no_apogee_on_or_below_pad() {
        let mut det = ApogeeDetector;
        let s = make_state(0.001, 0.0, -0.01);
        assert!(det.check(&s, &s).is_none());
        let s = make_state(0.5, -1.0, -5.0);
        assert!(det.check(&s, &s).is_none());
    }

    #[test]
    fn safety_bounds() {
        let mut b = SafetyBounds { max_time: 300.0, floor_altitude: -10.0 };
        let ok = make_state(299.0, -9.0, -1.0);
        assert!(b.check(&ok, &ok).is_none());
        let late = make_state(300.001, 5.0, 1.0);
        assert_eq!(b.check(&ok, &late), Some(EventKind::Abort(AbortReason::TimeLimit)));
        let low = make_state(1.5, -10.01, -14.0);
        assert_eq!(b.check(&ok, &low), Some(EventKind::Abort(AbortReason::BelowFloor)));
    }
}
