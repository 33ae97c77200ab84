/// Generate a frozen `#[pyclass]` struct where each field is a `Py<PyArray1<f64>>`.
///
/// Also generates a `from_series()` constructor that moves the columns of a
/// core `*Series` struct into numpy arrays, plus `__len__` and `to_dict()`.
macro_rules! define_series_result {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident from $core_type:ty {
            $($field:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[pyo3::pyclass(frozen)]
        $vis struct $name {
            len: usize,
            $(
                #[pyo3(get)]
                pub $field: pyo3::Py<numpy::PyArray1<f64>>,
            )+
        }

        impl $name {
            pub fn from_series(py: pyo3::Python<'_>, series: $core_type) -> Self {
                Self {
                    len: series.len(),
                    $(
                        $field: numpy::PyArray1::from_vec(py, series.$field).unbind(),
                    )+
                }
            }
        }

        #[pyo3::pymethods]
        impl $name {
            fn __len__(&self) -> usize {
                self.len
            }

            /// Columns as a `dict[str, numpy.ndarray]`.
            fn to_dict<'py>(
                &self,
                py: pyo3::Python<'py>,
            ) -> pyo3::PyResult<pyo3::Bound<'py, pyo3::types::PyDict>> {
                let dict = pyo3::types::PyDict::new(py);
                $(
                    dict.set_item(stringify!($field), self.$field.bind(py))?;
                )+
                Ok(dict)
            }
        }
    };
}
