#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod batch;
pub mod error;
pub mod geom;
pub mod ruler;
pub mod units;
#[cfg(feature = "python")]
mod py;

pub use error::RulerError;
pub use geom::{interpolate, BBox, Point, PointOnLine};
pub use ruler::CheapRuler;
pub use units::Unit;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
