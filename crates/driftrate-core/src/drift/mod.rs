/// Drift scenario: forced integration of S(t).
///
/// ΔN follows a sinusoid in time while ΔD is held fixed; S accumulates
/// dS/dt by forward Euler.
pub mod outputs;
pub mod run;
pub mod scenario;
pub mod state;

pub use outputs::{DriftSample, Trajectory};
pub use run::{integrate_drift, integrate_scenario, step, DriftIntegrator};
pub use scenario::{DriftForcing, DriftScenario};
pub use state::State;
