/// Drift-rate model constants and entry-point defaults.
///
/// Centralises the canonical parameter values and the default arguments
/// of every sampling and integration procedure.

// -- Canonical model parameters --

/// Amplitude scale of the response function.
pub const DEFAULT_A: f64 = 10.0;

/// Logistic steepness.
pub const DEFAULT_K: f64 = 8.0;

/// Logistic threshold centre on the ΔN axis.
pub const DEFAULT_N_CRIT: f64 = 0.5;

/// Suppression exponent applied to ΔD.
pub const DEFAULT_P: f64 = 2.0;

/// Suppression floor. Keeps `ΔD^p + eps` away from zero.
pub const DEFAULT_EPS: f64 = 0.01;

/// Linear ΔD coupling in dS/dt.
pub const DEFAULT_BETA: f64 = 0.8;

// -- Model contract constants --

/// Parameter names in array order.
pub const PARAM_NAMES: &[&str] = &["a", "k", "n_crit", "p", "eps", "beta"];

/// Number of model parameters.
pub const N_PARAMS: usize = 6;

// -- Field sampler --

/// Default grid resolution per axis.
pub const DEFAULT_FIELD_RESOLUTION: usize = 200;

// -- Slice sampler --

/// Number of evenly spaced samples along a slice.
pub const SLICE_SAMPLES: usize = 400;

/// Default ΔD values for the threshold slices, in display order.
pub const DEFAULT_SLICE_DELTA_D: [f64; 5] = [0.0, 0.2, 0.4, 0.6, 0.8];

/// Default fixed ΔN for the endogenous ΔD scan.
pub const DEFAULT_ENDOGENOUS_DELTA_N: f64 = 0.1;

// -- Drift integrator --

/// Default number of time samples in the drift scenario.
pub const DEFAULT_DRIFT_STEPS: usize = 2000;

/// Default Euler step.
pub const DEFAULT_DT: f64 = 0.01;

/// Centre of the sinusoidal ΔN drift.
pub const DRIFT_BASELINE: f64 = 0.5;

/// Amplitude of the sinusoidal ΔN drift.
pub const DRIFT_AMPLITUDE: f64 = 0.3;

/// Angular frequency of the sinusoidal ΔN drift [rad per unit time].
pub const DRIFT_ANGULAR_FREQUENCY: f64 = 1.0;

/// ΔD held constant during the drift scenario.
pub const DRIFT_DELTA_D: f64 = 0.5;

// -- Minimization analog --

/// Default number of descent iterations.
pub const DEFAULT_MIN_STEPS: usize = 2000;

/// Default descent learning rate.
pub const DEFAULT_ETA: f64 = 0.01;

/// Starting state of the descent.
pub const MIN_INITIAL_STATE: f64 = 1.0;
