use std::f64::consts::PI;

/// Frontal reference area of a round body, m^2.
pub fn frontal_area(diameter: f64) -> f64 {
    PI * (diameter / 2.0).powi(2)
}

/// Magnitude of aerodynamic drag opposing an ascending vehicle.
///
/// Only the ascent is modelled, so drag is zero while stationary or
/// descending.
pub fn drag_force(velocity: f64, density: f64, cd: f64, area: f64) -> f64 {
    if velocity <= 0.0 {
        return 0.0;
    }
    let q_dyn = 0.5 * density * velocity * velocity;
    q_dyn * cd * area
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn area_of_60mm_body() {
        assert_relative_eq!(frontal_area(0.06), 0.002_827_433_388, epsilon = 1e-9);
    }

    #[test]
    fn no_drag_when_not_ascending() {
        assert_eq!(drag_force(0.0, 1.225, 0.9, 0.003), 0.0);
        assert_eq!(drag_force(-20.0, 1.225, 0.9, 0.003), 0.0);
    }

    #[test]
    fn drag_is_quadratic_in_speed() {
        let d1 = drag_force(10.0, 1.225, 0.9, 0.003);
        let d2 = drag_force(20.0, 1.225, 0.9, 0.003);
        assert_relative_eq!(d2 / d1, 4.0, epsilon = 1e-12);
        assert_relative_eq!(d1, 0.5 * 1.225 * 100.0 * 0.9 * 0.003, epsilon = 1e-12);
    }
}
