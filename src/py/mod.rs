use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::RulerError;
use crate::geom::{self, Point};

mod batch;
mod ruler;

/// Register all Python-visible functions and types.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ruler::PyCheapRuler>()?;
    m.add_function(wrap_pyfunction!(ruler::from_tile, m)?)?;
    m.add_function(wrap_pyfunction!(interpolate, m)?)?;
    Ok(())
}

pub(crate) fn to_py_err(e: RulerError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Linear interpolation between two (x, y) tuples.
#[pyfunction]
fn interpolate(a: (f64, f64), b: (f64, f64), t: f64) -> (f64, f64) {
    geom::interpolate(Point::from(a), Point::from(b), t).to_tuple()
}
