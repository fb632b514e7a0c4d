// ---------------------------------------------------------------------------
// Exponential atmosphere (low-altitude sounding-rocket regime)
// ---------------------------------------------------------------------------

pub const RHO0: f64 = 1.225; // sea-level density, kg/m^3
pub const SCALE_HEIGHT: f64 = 8_500.0; // m

/// Air density at a given altitude: rho(h) = rho0 * exp(-h / H).
///
/// No clamping is applied below sea level; the integrator only asks for
/// density while ascending.
pub fn density(altitude_m: f64) -> f64 {
    RHO0 * (-altitude_m / SCALE_HEIGHT).exp()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sea_level_density() {
        assert_relative_eq!(density(0.0), 1.225);
    }

    #[test]
    fn one_scale_height_is_one_over_e() {
        assert_relative_eq!(density(SCALE_HEIGHT), RHO0 / std::f64::consts::E, epsilon = 1e-12);
    }

    #[test]
    fn density_monotonically_decreases() {
        let rho_0 = density(0.0);
        let rho_1k = density(1_000.0);
        let rho_10k = density(10_000.0);
        assert!(rho_0 > rho_1k);
        assert!(rho_1k > rho_10k);
        assert!(rho_10k > 0.0);
    }
}
