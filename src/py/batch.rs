//! NumPy entry points for batch distances.

use ndarray::Array2;
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use super::to_py_err;
use crate::ruler::CheapRuler;

fn stack_xy(x: &PyReadonlyArray1<'_, f64>, y: &PyReadonlyArray1<'_, f64>) -> PyResult<Array2<f64>> {
    let x = x.as_array();
    let y = y.as_array();
    if x.len() != y.len() {
        return Err(PyValueError::new_err(format!(
            "x and y must have same length, got {} and {}",
            x.len(),
            y.len()
        )));
    }
    Ok(Array2::from_shape_fn((x.len(), 2), |(i, j)| {
        if j == 0 {
            x[i]
        } else {
            y[i]
        }
    }))
}

/// Row-wise distances between (ax, ay) and (bx, by), computed in parallel with the
/// GIL released.
pub(super) fn distances<'py>(
    py: Python<'py>,
    ruler: CheapRuler,
    ax: PyReadonlyArray1<'py, f64>,
    ay: PyReadonlyArray1<'py, f64>,
    bx: PyReadonlyArray1<'py, f64>,
    by: PyReadonlyArray1<'py, f64>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    // Copy to owned before releasing the GIL
    let a = stack_xy(&ax, &ay)?;
    let b = stack_xy(&bx, &by)?;

    let out = py
        .allow_threads(move || ruler.par_distances(&a.view(), &b.view()))
        .map_err(to_py_err)?;

    Ok(PyArray1::from_owned_array(py, out))
}
