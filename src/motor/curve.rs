use log::debug;

// ---------------------------------------------------------------------------
// Tabulated thrust curve
// ---------------------------------------------------------------------------

/// One point of a motor thrust curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThrustSample {
    pub time: f64,   // s
    pub thrust: f64, // N
}

impl ThrustSample {
    pub fn new(time: f64, thrust: f64) -> Self {
        Self { time, thrust }
    }
}

/// Piecewise-linear thrust curve with strictly increasing sample times.
///
/// Thrust is zero outside `[first.time, last.time]`; there is no
/// extrapolation. Curves with fewer than two samples produce no thrust.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThrustCurve {
    samples: Vec<ThrustSample>,
}

impl ThrustCurve {
    /// Build a curve, dropping samples that would break time ordering.
    pub fn new(samples: impl IntoIterator<Item = ThrustSample>) -> Self {
        let mut kept: Vec<ThrustSample> = Vec::new();
        for s in samples {
            if let Some(prev) = kept.last().filter(|p| s.time <= p.time) {
                debug!(
                    "dropping thrust sample at t={} (not after t={})",
                    s.time, prev.time
                );
                continue;
            }
            kept.push(s);
        }
        Self { samples: kept }
    }

    pub fn samples(&self) -> &[ThrustSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time of the last sample, or zero for an empty curve.
    pub fn end_time(&self) -> f64 {
        self.samples.last().map_or(0.0, |s| s.time)
    }

    /// Linearly interpolated thrust at time `t`.
    pub fn thrust_at(&self, t: f64) -> f64 {
        let (first, last) = match (self.samples.first(), self.samples.last()) {
            (Some(f), Some(l)) if self.samples.len() >= 2 => (f, l),
            _ => return 0.0,
        };
        if t.is_nan() || t < first.time || t > last.time {
            return 0.0;
        }

        let i = self.samples.partition_point(|s| s.time <= t);
        if i >= self.samples.len() {
            return last.thrust;
        }
        let lo = &self.samples[i - 1];
        let hi = &self.samples[i];
        let frac = (t - lo.time) / (hi.time - lo.time);
        lo.thrust + frac * (hi.thrust - lo.thrust)
    }

    /// Total impulse by trapezoidal integration, N·s.
    pub fn total_impulse(&self) -> f64 {
        self.samples
            .windows(2)
            .map(|w| 0.5 * (w[0].thrust + w[1].thrust) * (w[1].time - w[0].time))
            .sum()
    }

    /// Peak tabulated thrust, N.
    pub fn peak_thrust(&self) -> f64 {
        self.samples.iter().map(|s| s.thrust).fold(0.0_f64, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn curve(points: &[(f64, f64)]) -> ThrustCurve {
        ThrustCurve::new(points.iter().map(|&(t, f)| ThrustSample::new(t, f)))
    }

    #[test]
    fn exact_at_sample_times() {
        let c = curve(&[(0.0, 0.0), (0.1, 40.0), (0.5, 32.5), (1.2, 0.0)]);
        for s in c.samples() {
            assert_eq!(c.thrust_at(s.time), s.thrust);
        }
    }

    #[test]
    fn zero_outside_domain() {
        let c = curve(&[(0.05, 10.0), (0.1, 40.0), (1.0, 20.0)]);
        assert_eq!(c.thrust_at(0.0), 0.0);
        assert_eq!(c.thrust_at(0.049_999), 0.0);
        assert_eq!(c.thrust_at(1.000_001), 0.0);
        assert_eq!(c.thrust_at(-3.0), 0.0);
    }

    #[test]
    fn nan_time_produces_no_thrust() {
        let c = curve(&[(0.0, 0.0), (0.5, 30.0), (1.0, 0.0)]);
        assert_eq!(c.thrust_at(f64::NAN), 0.0);
        assert_eq!(c.thrust_at(f64::INFINITY), 0.0);
    }

    #[test]
    fn interpolates_between_samples() {
        let c = curve(&[(0.0, 0.0), (1.0, 50.0), (2.0, 10.0)]);
        assert_relative_eq!(c.thrust_at(0.25), 12.5, epsilon = 1e-12);
        assert_relative_eq!(c.thrust_at(1.5), 30.0, epsilon = 1e-12);

        // Convex combination of the bracketing samples
        let mut t = 1.0;
        while t <= 2.0 {
            let f = c.thrust_at(t);
            assert!(f <= 50.0 + 1e-9 && f >= 10.0 - 1e-9, "thrust {} at t={}", f, t);
            t += 0.01;
        }
    }

    #[test]
    fn trapezoid_impulse() {
        let c = curve(&[(0.0, 0.0), (1.0, 50.0)]);
        assert_relative_eq!(c.total_impulse(), 25.0);

        let c = curve(&[(0.0, 10.0), (0.5, 30.0), (1.5, 30.0), (2.0, 0.0)]);
        assert_relative_eq!(c.total_impulse(), 10.0 + 30.0 + 7.5, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_curves_produce_no_thrust() {
        let empty = ThrustCurve::default();
        assert_eq!(empty.thrust_at(0.0), 0.0);
        assert_eq!(empty.total_impulse(), 0.0);
        assert_eq!(empty.end_time(), 0.0);

        let single = curve(&[(0.3, 12.0)]);
        assert_eq!(single.thrust_at(0.3), 0.0);
        assert_eq!(single.total_impulse(), 0.0);
    }

    #[test]
    fn out_of_order_samples_are_dropped() {
        let c = curve(&[(0.0, 0.0), (0.5, 20.0), (0.5, 25.0), (0.4, 30.0), (1.0, 0.0)]);
        assert_eq!(c.len(), 3);
        assert_eq!(c.thrust_at(0.5), 20.0);
    }
}
