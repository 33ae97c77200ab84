use pyo3::prelude::*;

use driftrate_core::constants::{DEFAULT_ETA, DEFAULT_MIN_STEPS};
use driftrate_core::minimize;

define_series_result! {
    /// Gradient-descent trace; `state[i] = (1 - eta)**i`.
    pub struct MinimizationResult from driftrate_core::minimize::MinimizationTrace {
        state, gradient, objective,
    }
}

#[pyfunction]
#[pyo3(name = "minimize", signature = (t_steps=DEFAULT_MIN_STEPS, eta=DEFAULT_ETA))]
fn run_minimize(py: Python<'_>, t_steps: usize, eta: f64) -> MinimizationResult {
    MinimizationResult::from_series(py, minimize::minimize(t_steps, eta))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "minimize")?;
    m.add_function(wrap_pyfunction!(run_minimize, &m)?)?;
    m.add_class::<MinimizationResult>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
