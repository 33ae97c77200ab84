//! Response function α(ΔN, ΔD) and the rate model dS/dt.
//!
//! α is a logistic gate on ΔN divided by a power-law suppression on ΔD:
//!
//! ```text
//! α = A / ((1 + exp(-k·(ΔN - N_crit))) · (ΔD^p + eps))
//! dS/dt = α·ΔN + β·ΔD
//! ```
//!
//! Both functions are pure and never fail. When `-k·(ΔN - N_crit)` is large
//! enough for `exp` to overflow, the gate becomes infinite and α saturates
//! to exactly 0. ΔD must be non-negative when `p` is not an integer;
//! negative ΔD is not checked and yields NaN in that case.
use crate::params::Parameters;

/// Logistic gate denominator `1 + exp(-k·(ΔN - N_crit))`, in `[1, inf]`.
#[inline]
pub fn logistic_gate(delta_n: f64, params: &Parameters) -> f64 {
    1.0 + (-params.k * (delta_n - params.n_crit)).exp()
}

/// Suppression denominator `ΔD^p + eps`.
#[inline]
pub fn suppression(delta_d: f64, params: &Parameters) -> f64 {
    delta_d.powf(params.p) + params.eps
}

/// Response function α(ΔN, ΔD).
#[inline]
pub fn alpha(delta_n: f64, delta_d: f64, params: &Parameters) -> f64 {
    params.a / (logistic_gate(delta_n, params) * suppression(delta_d, params))
}

/// Drift rate dS/dt = α(ΔN, ΔD)·ΔN + β·ΔD.
#[inline]
pub fn dsdt(delta_n: f64, delta_d: f64, params: &Parameters) -> f64 {
    alpha(delta_n, delta_d, params) * delta_n + params.beta * delta_d
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_points(n: usize) -> impl Iterator<Item = f64> {
        (0..n).map(move |i| i as f64 / (n - 1) as f64)
    }

    // -- alpha --

    #[test]
    fn alpha_at_threshold_with_zero_divergence() {
        // gate = 1 + e^0 = 2, suppression = 0 + 0.01 -> 10 / 0.02
        let p = Parameters::default();
        assert_relative_eq!(alpha(0.5, 0.0, &p), 500.0, epsilon = 1e-9);
    }

    #[test]
    fn alpha_positive_and_bounded_on_unit_square() {
        let p = Parameters::default();
        let ceiling = p.alpha_ceiling();
        for n in unit_points(41) {
            for d in unit_points(41) {
                let a = alpha(n, d, &p);
                assert!(a > 0.0, "alpha({n}, {d}) = {a}");
                assert!(a <= ceiling, "alpha({n}, {d}) = {a} > {ceiling}");
            }
        }
    }

    #[test]
    fn alpha_non_decreasing_in_delta_n() {
        let p = Parameters::default();
        for d in [0.0, 0.25, 0.5, 1.0] {
            let values: Vec<f64> = unit_points(200).map(|n| alpha(n, d, &p)).collect();
            assert!(
                values.windows(2).all(|w| w[0] <= w[1]),
                "alpha not monotone in dN at dD={d}"
            );
        }
    }

    #[test]
    fn alpha_non_increasing_in_delta_d() {
        let p = Parameters::default();
        for n in [0.0, 0.1, 0.5, 1.0] {
            let values: Vec<f64> = unit_points(200).map(|d| alpha(n, d, &p)).collect();
            assert!(
                values.windows(2).all(|w| w[0] >= w[1]),
                "alpha not monotone in dD at dN={n}"
            );
        }
    }

    #[test]
    fn alpha_saturates_to_zero_on_overflow() {
        let p = Parameters::default();
        // -k·(dN - N_crit) = 8 * 1000.5 overflows exp to +inf
        let a = alpha(-1000.0, 0.5, &p);
        assert!(!a.is_nan());
        assert_eq!(a, 0.0);
    }

    #[test]
    fn alpha_saturates_to_gate_ceiling_for_large_delta_n() {
        let p = Parameters::default();
        // gate -> 1, so alpha -> A / eps at dD = 0
        assert_relative_eq!(alpha(1000.0, 0.0, &p), p.alpha_ceiling(), epsilon = 1e-9);
    }

    #[test]
    fn alpha_finite_at_zero_divergence() {
        let p = Parameters::default();
        assert!(alpha(0.0, 0.0, &p).is_finite());
    }

    // -- dsdt --

    #[test]
    fn dsdt_at_threshold_with_zero_divergence() {
        let p = Parameters::default();
        assert_relative_eq!(dsdt(0.5, 0.0, &p), 250.0, epsilon = 1e-9);
    }

    #[test]
    fn dsdt_is_linear_in_beta() {
        let p = Parameters::default();
        let no_coupling = Parameters { beta: 0.0, ..p };
        let diff = dsdt(0.3, 0.7, &p) - dsdt(0.3, 0.7, &no_coupling);
        assert_relative_eq!(diff, 0.8 * 0.7, epsilon = 1e-12);
    }

    #[test]
    fn dsdt_zero_novelty_reduces_to_coupling() {
        let p = Parameters::default();
        assert_relative_eq!(dsdt(0.0, 0.4, &p), 0.8 * 0.4, epsilon = 1e-12);
    }
}
