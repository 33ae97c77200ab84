use numpy::{PyArray1, PyArray2, PyArrayMethods, PyReadonlyArray1, PyUntypedArrayMethods};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::convert::{contiguous_slice, params_or_default};

use driftrate_core::constants::{
    DEFAULT_ENDOGENOUS_DELTA_N, DEFAULT_FIELD_RESOLUTION, DEFAULT_SLICE_DELTA_D,
};
use driftrate_core::field;
use driftrate_core::slices;

define_series_result! {
    /// A sampled curve: free variable `x`, dS/dt `y`.
    pub struct CurveResult from driftrate_core::slices::Curve {
        x, y,
    }
}

/// dS/dt field with its axes. `values[j, i]` is at `(delta_n[i], delta_d[j])`.
#[pyclass(frozen)]
pub struct FieldResult {
    #[pyo3(get)]
    pub values: Py<PyArray2<f64>>,
    #[pyo3(get)]
    pub delta_n: Py<PyArray1<f64>>,
    #[pyo3(get)]
    pub delta_d: Py<PyArray1<f64>>,
}

#[pymethods]
impl FieldResult {
    /// `(rows, cols)`, i.e. `(len(delta_d), len(delta_n))`.
    #[getter]
    fn shape(&self, py: Python<'_>) -> (usize, usize) {
        (self.delta_d.bind(py).len(), self.delta_n.bind(py).len())
    }
}

#[pyfunction]
#[pyo3(signature = (n=DEFAULT_FIELD_RESOLUTION, params=None))]
fn sample_field<'py>(
    py: Python<'py>,
    n: usize,
    params: Option<PyReadonlyArray1<'py, f64>>,
) -> PyResult<FieldResult> {
    let p = params_or_default(params.as_ref())?;
    let f = field::sample_field(n, &p);
    let (rows, cols) = f.shape();

    let values = PyArray1::from_vec(py, f.values).reshape([rows, cols])?;
    Ok(FieldResult {
        values: values.unbind(),
        delta_n: PyArray1::from_vec(py, f.delta_n).unbind(),
        delta_d: PyArray1::from_vec(py, f.delta_d).unbind(),
    })
}

/// Threshold slices as `dict[float, CurveResult]`, in request order.
#[pyfunction]
#[pyo3(signature = (delta_d_values=None, params=None))]
fn sample_threshold_slices<'py>(
    py: Python<'py>,
    delta_d_values: Option<PyReadonlyArray1<'py, f64>>,
    params: Option<PyReadonlyArray1<'py, f64>>,
) -> PyResult<Bound<'py, PyDict>> {
    let p = params_or_default(params.as_ref())?;
    let values = match &delta_d_values {
        Some(arr) => contiguous_slice(arr)?.to_vec(),
        None => DEFAULT_SLICE_DELTA_D.to_vec(),
    };

    let result = slices::sample_threshold_slices(&values, &p);
    let dict = PyDict::new(py);
    for slice in &result {
        let curve = CurveResult::from_series(py, slice.curve.clone());
        dict.set_item(slice.delta_d, Py::new(py, curve)?)?;
    }
    Ok(dict)
}

#[pyfunction]
#[pyo3(signature = (delta_n=DEFAULT_ENDOGENOUS_DELTA_N, params=None))]
fn sample_endogenous<'py>(
    py: Python<'py>,
    delta_n: f64,
    params: Option<PyReadonlyArray1<'py, f64>>,
) -> PyResult<CurveResult> {
    let p = params_or_default(params.as_ref())?;
    let curve = slices::sample_endogenous(delta_n, &p);
    Ok(CurveResult::from_series(py, curve))
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "sampling")?;
    m.add_function(wrap_pyfunction!(sample_field, &m)?)?;
    m.add_function(wrap_pyfunction!(sample_threshold_slices, &m)?)?;
    m.add_function(wrap_pyfunction!(sample_endogenous, &m)?)?;
    m.add_class::<FieldResult>()?;
    m.add_class::<CurveResult>()?;
    parent.add_submodule(&m)?;
    Ok(())
}
