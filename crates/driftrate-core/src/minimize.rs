//! Gradient-descent analog on `f(x) = x² / 2`.
//!
//! `x_0 = 1`, `x_i = x_{i-1} - η · x_{i-1}`, so `x_i = (1 - η)^i`. The trace
//! converges geometrically to 0 for `0 < η < 2`. It does not depend on the
//! drift-rate model and serves only as a qualitative comparison baseline.
use driftrate_macros::Sample;
use tracing::debug;

use crate::constants::MIN_INITIAL_STATE;
use crate::traits::{Integrator, SeriesOps};

/// Descent settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Descent {
    pub eta: f64,
}

/// One iterate of the descent.
#[derive(Debug, Clone, Copy, PartialEq, Sample)]
#[sample(series_name = "MinimizationTrace")]
pub struct DescentSample {
    pub state: f64,
    pub gradient: f64,
    pub objective: f64,
}

impl DescentSample {
    fn at(x: f64) -> Self {
        Self {
            state: x,
            gradient: x,
            objective: 0.5 * x * x,
        }
    }
}

impl SeriesOps<DescentSample> for MinimizationTrace {
    fn with_capacity(n: usize) -> Self {
        MinimizationTrace::with_capacity(n)
    }

    fn push(&mut self, s: &DescentSample) {
        MinimizationTrace::push(self, s)
    }

    fn len(&self) -> usize {
        MinimizationTrace::len(self)
    }

    fn is_empty(&self) -> bool {
        MinimizationTrace::is_empty(self)
    }
}

/// Fixed-step descent on the quadratic bowl.
pub struct GradientDescent;

impl Integrator for GradientDescent {
    type Params = Descent;
    type State = f64;
    type Forcing = ();
    type Sample = DescentSample;
    type Series = MinimizationTrace;

    fn initialize_state(_params: &Descent) -> f64 {
        MIN_INITIAL_STATE
    }

    fn initial_sample(state: &f64, _forcing: &()) -> DescentSample {
        DescentSample::at(*state)
    }

    fn step(state: &f64, params: &Descent, _forcing: &()) -> (f64, DescentSample) {
        let grad = *state;
        let x = state - params.eta * grad;
        (x, DescentSample::at(x))
    }
}

/// Run `t_steps` descent iterations from `x_0 = 1`.
///
/// The trace holds `t_steps + 1` states with `trace.state[i] = x_i`.
pub fn minimize(t_steps: usize, eta: f64) -> MinimizationTrace {
    debug!(t_steps, eta, "running minimization analog");
    let forcing = vec![(); t_steps + 1];
    GradientDescent::run(&Descent { eta }, &forcing, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_ETA, DEFAULT_MIN_STEPS};
    use approx::assert_relative_eq;

    #[test]
    fn trace_starts_at_one() {
        let trace = minimize(10, 0.01);
        assert_eq!(trace.state[0], 1.0);
        assert_eq!(trace.len(), 11);
    }

    #[test]
    fn zero_steps_keeps_initial_state() {
        let trace = minimize(0, 0.01);
        assert_eq!(trace.state, vec![1.0]);
    }

    #[test]
    fn tenth_iterate() {
        let trace = minimize(1000, 0.01);
        assert_relative_eq!(trace.state[10], 0.99_f64.powi(10), epsilon = 1e-6);
        assert_relative_eq!(trace.state[10], 0.9044, epsilon = 1e-4);
    }

    #[test]
    fn geometric_contraction() {
        let eta = 0.05;
        let trace = minimize(200, eta);
        for (i, x) in trace.state.iter().enumerate() {
            assert_relative_eq!(*x, (1.0 - eta).powi(i as i32), epsilon = 1e-12);
        }
    }

    #[test]
    fn default_run_converges_monotonically() {
        let trace = minimize(DEFAULT_MIN_STEPS, DEFAULT_ETA);
        assert_eq!(trace.len(), 2001);
        assert!(trace.state.windows(2).all(|w| w[1] < w[0]));
        assert!(trace.state[2000] < 1e-8);
    }

    #[test]
    fn diverges_for_large_eta() {
        let trace = minimize(10, 2.5);
        assert!(trace.state[10].abs() > 1.0);
    }

    #[test]
    fn gradient_and_objective_track_state() {
        let trace = minimize(5, 0.1);
        let s = trace.get(3).unwrap();
        assert_eq!(s.gradient, s.state);
        assert_relative_eq!(s.objective, 0.5 * s.state * s.state, epsilon = 1e-15);
    }
}
