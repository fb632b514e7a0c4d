use crate::motor::MotorProfile;
use crate::sim::{Sample, SimulationResult};

// ---------------------------------------------------------------------------
// Chart descriptions for the plot viewer
// ---------------------------------------------------------------------------

/// Upper bound on plotted points per series.
pub const MAX_POINTS: usize = 2_000;

#[derive(Debug, Clone, PartialEq)]
pub enum Marker {
    /// Vertical line at a time value.
    Time { at: f64, label: String },
    /// Horizontal line at a value of the plotted quantity.
    Level { at: f64, label: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub title: String,
    pub y_label: String,
    pub points: Vec<[f64; 2]>,
    pub markers: Vec<Marker>,
}

fn decimate(result: &SimulationResult, value: impl Fn(&Sample) -> f64) -> Vec<[f64; 2]> {
    let step = result.series.len().div_ceil(MAX_POINTS).max(1);
    let mut points: Vec<[f64; 2]> = result
        .series
        .iter()
        .step_by(step)
        .map(|s| [s.time, value(s)])
        .collect();
    // Keep the terminal sample so apogee sits on the curve
    if let Some(last) = result.series.last() {
        if points.last().map_or(true, |p| p[0] != last.time) {
            points.push([last.time, value(last)]);
        }
    }
    points
}

/// Thrust, altitude and velocity charts annotated with burnout, apogee and
/// rail-exit markers.
pub fn flight_charts(motor: &MotorProfile, result: &SimulationResult) -> [Chart; 3] {
    let burn_time = motor.burn_time();
    let burnout = Marker::Time {
        at: burn_time,
        label: format!("Burnout ({:.2} s)", burn_time),
    };

    let thrust = Chart {
        title: format!("Thrust curve - {}", motor.name()),
        y_label: "Thrust (N)".into(),
        points: decimate(result, |s| s.thrust),
        markers: vec![burnout.clone()],
    };

    let mut altitude_markers = Vec::new();
    if result.reached_apogee() {
        altitude_markers.push(Marker::Level {
            at: result.apogee_altitude(),
            label: format!("Apogee: {:.2} m", result.apogee_altitude()),
        });
    }
    altitude_markers.push(Marker::Level {
        at: 2.0,
        label: "Rail exit (2 m)".into(),
    });
    let altitude = Chart {
        title: "Altitude vs time".into(),
        y_label: "Altitude (m)".into(),
        points: decimate(result, |s| s.altitude),
        markers: altitude_markers,
    };

    let velocity = Chart {
        title: "Velocity vs time".into(),
        y_label: "Velocity (m/s)".into(),
        points: decimate(result, |s| s.velocity),
        markers: vec![
            Marker::Level { at: 0.0, label: "Zero".into() },
            burnout,
        ],
    };

    [thrust, altitude, velocity]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::SimConfig;
    use crate::sim::simulate;
    use crate::vehicle::VehicleBuilder;

    #[test]
    fn three_annotated_charts() {
        let motor = MotorProfile::constant("Custom", 105.0, 115.0 / 105.0, 0.130);
        let vehicle = VehicleBuilder::new(0.910).motor(&motor).build();
        let result = simulate(&vehicle, &motor, &SimConfig::default());
        let [thrust, altitude, velocity] = flight_charts(&motor, &result);

        assert!(thrust.title.contains("Custom"));
        assert!(matches!(thrust.markers[0], Marker::Time { at, .. } if at == motor.burn_time()));
        assert!(altitude
            .markers
            .iter()
            .any(|m| matches!(m, Marker::Level { at, .. } if *at == result.apogee_altitude())));
        assert_eq!(velocity.markers.len(), 2);

        for chart in [&thrust, &altitude, &velocity] {
            assert!(chart.points.len() <= MAX_POINTS + 1);
            assert_eq!(chart.points.last().unwrap()[0], result.series.last().unwrap().time);
        }
    }
}
