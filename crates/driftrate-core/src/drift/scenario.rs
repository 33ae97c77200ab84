/// Drift law and the per-index forcing it produces.
///
/// `ΔN(t) = baseline + amplitude · sin(angular_frequency · t)`, ΔD fixed.
use crate::constants::{DRIFT_AMPLITUDE, DRIFT_ANGULAR_FREQUENCY, DRIFT_BASELINE, DRIFT_DELTA_D};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftScenario {
    pub baseline: f64,
    pub amplitude: f64,
    pub angular_frequency: f64,
    pub delta_d: f64,
}

impl Default for DriftScenario {
    fn default() -> Self {
        Self {
            baseline: DRIFT_BASELINE,
            amplitude: DRIFT_AMPLITUDE,
            angular_frequency: DRIFT_ANGULAR_FREQUENCY,
            delta_d: DRIFT_DELTA_D,
        }
    }
}

/// Forcing for one time index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftForcing {
    pub t: f64,
    pub delta_n: f64,
    pub delta_d: f64,
    pub dt: f64,
}

impl DriftScenario {
    /// ΔN at time `t`.
    #[inline]
    pub fn delta_n(&self, t: f64) -> f64 {
        self.baseline + self.amplitude * (self.angular_frequency * t).sin()
    }

    /// Forcing at `t = i · dt` for `i = 0..t_steps`.
    pub fn forcing(&self, t_steps: usize, dt: f64) -> Vec<DriftForcing> {
        (0..t_steps)
            .map(|i| {
                let t = i as f64 * dt;
                DriftForcing {
                    t,
                    delta_n: self.delta_n(t),
                    delta_d: self.delta_d,
                    dt,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_drift_law() {
        let s = DriftScenario::default();
        assert_eq!(s.delta_n(0.0), 0.5);
        assert_relative_eq!(s.delta_n(std::f64::consts::FRAC_PI_2), 0.8, epsilon = 1e-12);
        assert_relative_eq!(s.delta_n(-std::f64::consts::FRAC_PI_2), 0.2, epsilon = 1e-12);
    }

    #[test]
    fn forcing_time_grid() {
        let f = DriftScenario::default().forcing(4, 0.25);
        let t: Vec<f64> = f.iter().map(|x| x.t).collect();
        assert_eq!(t, vec![0.0, 0.25, 0.5, 0.75]);
        assert!(f.iter().all(|x| x.delta_d == 0.5 && x.dt == 0.25));
    }

    #[test]
    fn forcing_empty() {
        assert!(DriftScenario::default().forcing(0, 0.01).is_empty());
    }
}
