use crate::dynamics::state::G0;
use crate::motor::MotorProfile;
use crate::physics::aerodynamics::frontal_area;

// ---------------------------------------------------------------------------
// Vehicle definition (single stage, loaded motor included)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub total_mass: f64,       // kg at liftoff, motor included
    pub propellant_mass: f64,  // kg
    pub diameter: f64,         // m, frontal
    pub drag_coefficient: f64, // dimensionless
}

impl Vehicle {
    /// Mass after all propellant has burned.
    pub fn final_mass(&self) -> f64 {
        self.total_mass - self.propellant_mass
    }

    /// Frontal reference area, m^2.
    pub fn frontal_area(&self) -> f64 {
        frontal_area(self.diameter)
    }

    /// Instantaneous mass with linear propellant depletion over the burn.
    ///
    /// Exactly `final_mass()` at and after `burn_time`. A zero burn time
    /// means the propellant is considered gone from ignition.
    pub fn mass_at(&self, t: f64, burn_time: f64) -> f64 {
        if burn_time <= 0.0 || t >= burn_time {
            return self.final_mass();
        }
        let remaining = 1.0 - t.max(0.0) / burn_time;
        self.final_mass() + self.propellant_mass * remaining
    }

    /// Thrust-to-weight ratio at liftoff for a given thrust.
    pub fn thrust_to_weight(&self, thrust: f64) -> f64 {
        thrust / (self.total_mass * G0)
    }
}

// ---------------------------------------------------------------------------
// Vehicle builder
// ---------------------------------------------------------------------------

pub struct VehicleBuilder {
    empty_mass: f64,
    propellant_mass: f64,
    diameter: f64,
    drag_coefficient: f64,
}

impl VehicleBuilder {
    /// Start from the empty rocket mass (airframe without the motor's
    /// propellant).
    pub fn new(empty_mass: f64) -> Self {
        Self {
            empty_mass,
            propellant_mass: 0.0,
            diameter: 0.060,
            drag_coefficient: 0.9,
        }
    }

    pub fn propellant_mass(mut self, v: f64) -> Self { self.propellant_mass = v; self }
    pub fn diameter(mut self, v: f64) -> Self { self.diameter = v; self }
    pub fn drag_coefficient(mut self, v: f64) -> Self { self.drag_coefficient = v; self }

    /// Take the propellant load from a motor.
    pub fn motor(self, motor: &MotorProfile) -> Self {
        self.propellant_mass(motor.propellant_mass())
    }

    pub fn build(self) -> Vehicle {
        Vehicle {
            total_mass: self.empty_mass + self.propellant_mass,
            propellant_mass: self.propellant_mass,
            diameter: self.diameter,
            drag_coefficient: self.drag_coefficient,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn vehicle() -> Vehicle {
        VehicleBuilder::new(0.910)
            .propellant_mass(0.130)
            .diameter(0.060)
            .drag_coefficient(0.9)
            .build()
    }

    #[test]
    fn builder_adds_propellant_to_empty_mass() {
        let v = vehicle();
        assert_relative_eq!(v.total_mass, 1.040, epsilon = 1e-12);
        assert_relative_eq!(v.final_mass(), 0.910, epsilon = 1e-12);
    }

    #[test]
    fn builder_takes_motor_propellant() {
        let motor = MotorProfile::constant("Custom", 105.0, 1.0, 0.2);
        let v = VehicleBuilder::new(1.0).motor(&motor).build();
        assert_relative_eq!(v.propellant_mass, 0.2);
        assert_relative_eq!(v.total_mass, 1.2);
    }

    #[test]
    fn mass_depletes_linearly_then_holds() {
        let v = vehicle();
        let burn = 1.095;
        assert_relative_eq!(v.mass_at(0.0, burn), v.total_mass, epsilon = 1e-12);
        assert_relative_eq!(v.mass_at(burn / 2.0, burn), v.final_mass() + 0.065, epsilon = 1e-12);
        assert_eq!(v.mass_at(burn, burn), v.final_mass());
        assert_eq!(v.mass_at(5.0, burn), v.final_mass());
    }

    #[test]
    fn mass_is_non_increasing() {
        let v = vehicle();
        let burn = 1.3;
        let mut prev = v.mass_at(0.0, burn);
        for i in 1..=2000 {
            let m = v.mass_at(i as f64 * 0.001, burn);
            assert!(m <= prev, "mass rose at step {}", i);
            prev = m;
        }
    }

    #[test]
    fn zero_burn_time_is_guarded() {
        let v = vehicle();
        assert_eq!(v.mass_at(0.0, 0.0), v.final_mass());
        assert!(v.mass_at(0.5, 0.0).is_finite());
    }

    #[test]
    fn frontal_area_and_twr() {
        let v = vehicle();
        assert_relative_eq!(v.frontal_area(), 0.002_827_433_388, epsilon = 1e-9);
        assert_relative_eq!(v.thrust_to_weight(105.0), 105.0 / (1.040 * 9.81), epsilon = 1e-12);
    }
}
