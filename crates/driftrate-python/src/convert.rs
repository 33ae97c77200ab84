use numpy::PyReadonlyArray1;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use driftrate_core::traits::ModelParams;
use driftrate_core::Parameters;

/// Validate that a numpy array is C-contiguous and return its slice.
pub fn contiguous_slice<'py>(arr: &'py PyReadonlyArray1<'py, f64>) -> PyResult<&'py [f64]> {
    arr.as_slice()
        .map_err(|_| PyValueError::new_err("array must be C-contiguous"))
}

/// Parameters from an optional 6-element array in `PARAM_NAMES` order.
///
/// `None` selects the canonical defaults.
pub fn params_or_default(params: Option<&PyReadonlyArray1<'_, f64>>) -> PyResult<Parameters> {
    match params {
        None => Ok(Parameters::default()),
        Some(arr) => {
            let slice = contiguous_slice(arr)?;
            Parameters::from_array(slice).map_err(|e| PyValueError::new_err(e.to_string()))
        }
    }
}

/// Two same-length slices, or a `ValueError` naming both.
pub fn paired_slices<'py>(
    a: &'py PyReadonlyArray1<'py, f64>,
    a_name: &str,
    b: &'py PyReadonlyArray1<'py, f64>,
    b_name: &str,
) -> PyResult<(&'py [f64], &'py [f64])> {
    let a_slice = contiguous_slice(a)?;
    let b_slice = contiguous_slice(b)?;
    if a_slice.len() != b_slice.len() {
        return Err(PyValueError::new_err(format!(
            "{} has {} elements but {} has {}",
            a_name,
            a_slice.len(),
            b_name,
            b_slice.len()
        )));
    }
    Ok((a_slice, b_slice))
}
