use super::curve::{ThrustCurve, ThrustSample};
use super::eng::{EngFile, EngHeader};

// ---------------------------------------------------------------------------
// Motor profiles: tabulated curve or constant average thrust
// ---------------------------------------------------------------------------

/// Motor defined by a tabulated thrust curve (typically a RASP `.eng` file).
#[derive(Debug, Clone, PartialEq)]
pub struct SampledMotor {
    pub name: String,
    pub curve: ThrustCurve,
    pub propellant_mass: f64, // kg
    pub total_mass: f64,      // kg, loaded motor (informational)
    pub header: Option<EngHeader>,
}

/// Motor defined by average thrust held constant over the burn.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantMotor {
    pub name: String,
    pub thrust: f64,          // N
    pub burn_time: f64,       // s
    pub propellant_mass: f64, // kg
}

/// Thrust source for a flight.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorProfile {
    Sampled(SampledMotor),
    Constant(ConstantMotor),
}

impl MotorProfile {
    pub fn sampled(
        name: impl Into<String>,
        samples: impl IntoIterator<Item = ThrustSample>,
        propellant_mass: f64,
        total_mass: f64,
    ) -> Self {
        MotorProfile::Sampled(SampledMotor {
            name: name.into(),
            curve: ThrustCurve::new(samples),
            propellant_mass,
            total_mass,
            header: None,
        })
    }

    pub fn constant(
        name: impl Into<String>,
        thrust: f64,
        burn_time: f64,
        propellant_mass: f64,
    ) -> Self {
        MotorProfile::Constant(ConstantMotor {
            name: name.into(),
            thrust,
            burn_time,
            propellant_mass,
        })
    }

    /// Build a sampled profile from a parsed motor file.
    pub fn from_eng(eng: EngFile) -> Self {
        let EngFile { header, samples } = eng;
        MotorProfile::Sampled(SampledMotor {
            name: header.name.clone(),
            curve: ThrustCurve::new(samples),
            propellant_mass: header.propellant_mass,
            total_mass: header.total_mass,
            header: Some(header),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            MotorProfile::Sampled(m) => &m.name,
            MotorProfile::Constant(m) => &m.name,
        }
    }

    /// Thrust at time `t` since ignition, N. Zero after burnout.
    pub fn thrust_at(&self, t: f64) -> f64 {
        if t > self.burn_time() {
            return 0.0;
        }
        match self {
            MotorProfile::Sampled(m) => m.curve.thrust_at(t),
            MotorProfile::Constant(m) => m.thrust,
        }
    }

    /// Burn duration, s. For a curve this is the last sample time.
    pub fn burn_time(&self) -> f64 {
        match self {
            MotorProfile::Sampled(m) => m.curve.end_time(),
            MotorProfile::Constant(m) => m.burn_time,
        }
    }

    pub fn propellant_mass(&self) -> f64 {
        match self {
            MotorProfile::Sampled(m) => m.propellant_mass,
            MotorProfile::Constant(m) => m.propellant_mass,
        }
    }

    /// Loaded motor mass when known from the motor file.
    pub fn total_mass(&self) -> Option<f64> {
        match self {
            MotorProfile::Sampled(m) => Some(m.total_mass),
            MotorProfile::Constant(_) => None,
        }
    }

    /// Total impulse, N·s.
    pub fn total_impulse(&self) -> f64 {
        match self {
            MotorProfile::Sampled(m) => m.curve.total_impulse(),
            MotorProfile::Constant(m) => m.thrust * m.burn_time.max(0.0),
        }
    }

    /// Average thrust over the burn, N.
    ///
    /// Degenerate curves (fewer than two samples or zero burn time)
    /// average to zero.
    pub fn average_thrust(&self) -> f64 {
        match self {
            MotorProfile::Sampled(m) => {
                let burn_time = m.curve.end_time();
                if m.curve.len() < 2 || burn_time <= 0.0 {
                    0.0
                } else {
                    m.curve.total_impulse() / burn_time
                }
            }
            MotorProfile::Constant(m) => m.thrust,
        }
    }

    /// Peak thrust, N.
    pub fn peak_thrust(&self) -> f64 {
        match self {
            MotorProfile::Sampled(m) => m.curve.peak_thrust(),
            MotorProfile::Constant(m) => m.thrust,
        }
    }

    /// NAR impulse class ("1/2A", "A", "B", ...), each class doubling the
    /// upper impulse bound starting from 2.5 N·s for class A.
    pub fn impulse_class(&self) -> Option<String> {
        impulse_class(self.total_impulse())
    }
}

pub fn impulse_class(total_impulse: f64) -> Option<String> {
    if !total_impulse.is_finite() || total_impulse <= 0.0 {
        return None;
    }
    let k = (total_impulse / 2.5).log2().ceil() as i32;
    if k < 0 {
        let denom = 1u64 << (-k).min(8);
        Some(format!("1/{}A", denom))
    } else if k < 26 {
        Some(char::from(b'A' + k as u8).to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp() -> MotorProfile {
        MotorProfile::sampled(
            "F35",
            [ThrustSample::new(0.0, 0.0), ThrustSample::new(1.0, 50.0)],
            0.090,
            0.118,
        )
    }

    #[test]
    fn ramp_average_thrust() {
        let m = ramp();
        assert_relative_eq!(m.burn_time(), 1.0);
        assert_relative_eq!(m.average_thrust(), 25.0);
        assert_relative_eq!(m.propellant_mass(), 0.090);
        assert_eq!(m.total_mass(), Some(0.118));
    }

    #[test]
    fn average_times_burn_time_is_impulse() {
        let m = MotorProfile::sampled(
            "G",
            [
                ThrustSample::new(0.0, 0.0),
                ThrustSample::new(0.05, 80.0),
                ThrustSample::new(0.3, 60.0),
                ThrustSample::new(1.4, 45.0),
                ThrustSample::new(1.6, 0.0),
            ],
            0.06,
            0.12,
        );
        assert_relative_eq!(
            m.average_thrust() * m.burn_time(),
            m.total_impulse(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn constant_profile() {
        let m = MotorProfile::constant("Custom", 105.0, 115.0 / 105.0, 0.130);
        assert_eq!(m.thrust_at(0.0), 105.0);
        assert_eq!(m.thrust_at(1.0), 105.0);
        assert_eq!(m.thrust_at(1.1), 0.0);
        assert_eq!(m.average_thrust(), 105.0);
        assert_relative_eq!(m.total_impulse(), 115.0, epsilon = 1e-9);
        assert_eq!(m.total_mass(), None);
    }

    #[test]
    fn degenerate_profiles_yield_zero() {
        let empty = MotorProfile::sampled("empty", Vec::new(), 0.01, 0.02);
        assert_eq!(empty.burn_time(), 0.0);
        assert_eq!(empty.average_thrust(), 0.0);
        assert_eq!(empty.thrust_at(0.0), 0.0);

        let single = MotorProfile::sampled("one", [ThrustSample::new(0.5, 30.0)], 0.01, 0.02);
        assert_eq!(single.average_thrust(), 0.0);
        assert_eq!(single.thrust_at(0.5), 0.0);

        let instant = MotorProfile::constant("instant", 50.0, 0.0, 0.01);
        assert_eq!(instant.thrust_at(0.001), 0.0);
    }

    #[test]
    fn no_thrust_after_burnout() {
        let m = ramp();
        assert_eq!(m.thrust_at(1.0), 50.0);
        assert_eq!(m.thrust_at(1.000_1), 0.0);
    }

    #[test]
    fn impulse_classes() {
        assert_eq!(impulse_class(2.5).as_deref(), Some("A"));
        assert_eq!(impulse_class(2.6).as_deref(), Some("B"));
        assert_eq!(impulse_class(40.0).as_deref(), Some("E"));
        assert_eq!(impulse_class(60.0).as_deref(), Some("F"));
        assert_eq!(impulse_class(1.0).as_deref(), Some("1/2A"));
        assert_eq!(impulse_class(0.0), None);
    }
}
