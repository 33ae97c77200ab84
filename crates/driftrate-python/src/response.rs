use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::convert::{paired_slices, params_or_default};

use driftrate_core::constants::PARAM_NAMES;
use driftrate_core::response;
use driftrate_core::traits::ModelParams;
use driftrate_core::Parameters;

#[pyfunction]
#[pyo3(signature = (delta_n, delta_d, params=None))]
fn alpha<'py>(
    delta_n: f64,
    delta_d: f64,
    params: Option<PyReadonlyArray1<'py, f64>>,
) -> PyResult<f64> {
    let p = params_or_default(params.as_ref())?;
    Ok(response::alpha(delta_n, delta_d, &p))
}

#[pyfunction]
#[pyo3(signature = (delta_n, delta_d, params=None))]
fn dsdt<'py>(
    delta_n: f64,
    delta_d: f64,
    params: Option<PyReadonlyArray1<'py, f64>>,
) -> PyResult<f64> {
    let p = params_or_default(params.as_ref())?;
    Ok(response::dsdt(delta_n, delta_d, &p))
}

/// Elementwise α over paired ΔN and ΔD arrays.
#[pyfunction]
#[pyo3(signature = (delta_n, delta_d, params=None))]
fn alpha_array<'py>(
    py: Python<'py>,
    delta_n: PyReadonlyArray1<'py, f64>,
    delta_d: PyReadonlyArray1<'py, f64>,
    params: Option<PyReadonlyArray1<'py, f64>>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let p = params_or_default(params.as_ref())?;
    let (ns, ds) = paired_slices(&delta_n, "delta_n", &delta_d, "delta_d")?;
    let out: Vec<f64> = ns
        .iter()
        .zip(ds)
        .map(|(&n, &d)| response::alpha(n, d, &p))
        .collect();
    Ok(PyArray1::from_vec(py, out))
}

/// Elementwise dS/dt over paired ΔN and ΔD arrays.
#[pyfunction]
#[pyo3(signature = (delta_n, delta_d, params=None))]
fn dsdt_array<'py>(
    py: Python<'py>,
    delta_n: PyReadonlyArray1<'py, f64>,
    delta_d: PyReadonlyArray1<'py, f64>,
    params: Option<PyReadonlyArray1<'py, f64>>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let p = params_or_default(params.as_ref())?;
    let (ns, ds) = paired_slices(&delta_n, "delta_n", &delta_d, "delta_d")?;
    let out: Vec<f64> = ns
        .iter()
        .zip(ds)
        .map(|(&n, &d)| response::dsdt(n, d, &p))
        .collect();
    Ok(PyArray1::from_vec(py, out))
}

/// Canonical parameters as a numpy array in `PARAM_NAMES` order.
#[pyfunction]
fn default_params<'py>(py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
    PyArray1::from_vec(py, Parameters::default().to_array())
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "response")?;
    m.add_function(wrap_pyfunction!(alpha, &m)?)?;
    m.add_function(wrap_pyfunction!(dsdt, &m)?)?;
    m.add_function(wrap_pyfunction!(alpha_array, &m)?)?;
    m.add_function(wrap_pyfunction!(dsdt_array, &m)?)?;
    m.add_function(wrap_pyfunction!(default_params, &m)?)?;
    m.add("PARAM_NAMES", PARAM_NAMES.to_vec())?;
    parent.add_submodule(&m)?;
    Ok(())
}
