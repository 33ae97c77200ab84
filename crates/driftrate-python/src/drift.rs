use numpy::PyReadonlyArray1;
use pyo3::prelude::*;

use crate::convert::params_or_default;

use driftrate_core::constants::{DEFAULT_DRIFT_STEPS, DEFAULT_DT};
use driftrate_core::drift;

define_series_result! {
    /// Drift trajectory with typed numpy array attributes.
    ///
    /// `dsdt[0]` is always 0: the first index is recorded, not stepped.
    pub struct TrajectoryResult from driftrate_core::drift::Trajectory {
        t, delta_n, dsdt, s,
    }
}

#[pyfunction]
#[pyo3(signature = (t_steps=DEFAULT_DRIFT_STEPS, dt=DEFAULT_DT, params=None))]
fn integrate_drift<'py>(
    py: Python<'py>,
    t_steps: usize,
    dt: f64,
    params: Option<PyReadonlyArray1<'py, f64>>,
) -> PyResult<TrajectoryResult> {
    let p = params_or_default(params.as_ref())?;
    let traj = drift::integrate_drift(t_steps, dt, &p);
    Ok(TrajectoryResult::from_series(py, traj))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "drift")?;
    m.add_function(wrap_pyfunction!(integrate_drift, &m)?)?;
    m.add_class::<TrajectoryResult>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
