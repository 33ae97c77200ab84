//! End-to-end checks of the public entry points with default settings.
use approx::assert_relative_eq;

use driftrate_core::constants::{
    DEFAULT_DRIFT_STEPS, DEFAULT_DT, DEFAULT_ETA, DEFAULT_FIELD_RESOLUTION, DEFAULT_MIN_STEPS,
};
use driftrate_core::drift::integrate_drift;
use driftrate_core::field::sample_field;
use driftrate_core::minimize::minimize;
use driftrate_core::slices::{sample_default_endogenous, sample_default_threshold_slices};
use driftrate_core::{alpha, dsdt, Parameters};

#[test]
fn canonical_rate_at_threshold() {
    let p = Parameters::default();
    assert_relative_eq!(alpha(0.5, 0.0, &p), 500.0, epsilon = 1e-9);
    assert_relative_eq!(dsdt(0.5, 0.0, &p), 250.0, epsilon = 1e-9);
}

#[test]
fn default_field_agrees_with_slices() {
    let p = Parameters::default();
    let field = sample_field(DEFAULT_FIELD_RESOLUTION, &p);
    assert_eq!(field.shape(), (200, 200));

    // Row 0 of the field is the dD = 0 slice, sampled on a coarser grid.
    let slices = sample_default_threshold_slices(&p);
    let zero = slices.get(0.0).unwrap();
    assert_relative_eq!(field.get(0, 0).unwrap(), zero.y[0], epsilon = 1e-12);
    assert_relative_eq!(field.get(0, 199).unwrap(), zero.y[399], epsilon = 1e-12);
}

#[test]
fn endogenous_scan_starts_at_field_column() {
    let p = Parameters::default();
    let curve = sample_default_endogenous(&p);
    assert_relative_eq!(curve.y[0], dsdt(0.1, 0.0, &p), epsilon = 1e-12);
    assert_relative_eq!(curve.y[399], dsdt(0.1, 1.0, &p), epsilon = 1e-12);
}

#[test]
fn drift_and_minimization_defaults() {
    let p = Parameters::default();
    let traj = integrate_drift(DEFAULT_DRIFT_STEPS, DEFAULT_DT, &p);
    let trace = minimize(DEFAULT_MIN_STEPS, DEFAULT_ETA);

    assert_eq!(traj.len(), DEFAULT_DRIFT_STEPS);
    assert_eq!(traj.s[0], 0.0);
    assert_eq!(traj.dsdt[0], 0.0);
    assert_eq!(trace.state[0], 1.0);
    assert_relative_eq!(trace.state[10], 0.99_f64.powi(10), epsilon = 1e-6);
}

#[test]
fn independent_configurations_do_not_interfere() {
    let base = Parameters::default();
    let steep = Parameters::new(10.0, 40.0, 0.5, 2.0, 0.01, 0.8).unwrap();
    let a = sample_field(9, &base);
    let b = sample_field(9, &steep);
    let a_again = sample_field(9, &base);
    assert_eq!(a, a_again);
    assert_ne!(a, b);
}
