/// Drift scenario orchestration functions.
///
/// - `step()`: one forward Euler step → (State, DriftSample)
/// - `integrate_scenario()`: any drift law → Trajectory
/// - `integrate_drift()`: the canonical drift law → Trajectory
use tracing::debug;

use super::outputs::{DriftSample, Trajectory};
use super::scenario::{DriftForcing, DriftScenario};
use super::state::State;
use crate::params::Parameters;
use crate::response::dsdt;
use crate::traits::Integrator;

/// Execute one forward Euler step.
///
/// `S_new = S + dSdt(ΔN, ΔD) · dt`. The input state is not mutated.
pub fn step(state: &State, params: &Parameters, forcing: &DriftForcing) -> (State, DriftSample) {
    let rate = dsdt(forcing.delta_n, forcing.delta_d, params);
    let accumulated = state.accumulated + rate * forcing.dt;

    let sample = DriftSample {
        t: forcing.t,
        delta_n: forcing.delta_n,
        dsdt: rate,
        s: accumulated,
    };

    (State { accumulated }, sample)
}

/// Forward Euler integrator for the drift scenario.
pub struct DriftIntegrator;

impl Integrator for DriftIntegrator {
    type Params = Parameters;
    type State = State;
    type Forcing = DriftForcing;
    type Sample = DriftSample;
    type Series = Trajectory;

    fn initialize_state(_params: &Parameters) -> State {
        State::initialize()
    }

    /// Index 0 records S without evaluating the rate: dS/dt stays at 0.
    fn initial_sample(state: &State, forcing: &DriftForcing) -> DriftSample {
        DriftSample {
            t: forcing.t,
            delta_n: forcing.delta_n,
            dsdt: 0.0,
            s: state.accumulated,
        }
    }

    fn step(
        state: &State,
        params: &Parameters,
        forcing: &DriftForcing,
    ) -> (State, DriftSample) {
        step(state, params, forcing)
    }
}

/// Integrate S(t) for `t_steps` time indices under an arbitrary drift law.
///
/// No stability control is applied; `dt` is used as given.
pub fn integrate_scenario(
    scenario: &DriftScenario,
    t_steps: usize,
    dt: f64,
    params: &Parameters,
) -> Trajectory {
    debug!(t_steps, dt, ?scenario, "integrating drift scenario");
    let forcing = scenario.forcing(t_steps, dt);
    DriftIntegrator::run(params, &forcing, None)
}

/// Integrate S(t) under `ΔN(t) = 0.5 + 0.3·sin(t)`, `ΔD = 0.5`.
pub fn integrate_drift(t_steps: usize, dt: f64, params: &Parameters) -> Trajectory {
    integrate_scenario(&DriftScenario::default(), t_steps, dt, params)
}
