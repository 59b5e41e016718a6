//! PyO3 class wrapping [`CheapRuler`].

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::to_py_err;
use crate::geom::{BBox, Point};
use crate::ruler::CheapRuler;
use crate::units::Unit;

type Coord = (f64, f64);
type Bounds = (f64, f64, f64, f64);

fn to_points(line: &[Coord]) -> Vec<Point> {
    line.iter().copied().map(Point::from).collect()
}

fn tuples(line: &[Point]) -> Vec<Coord> {
    line.iter().map(Point::to_tuple).collect()
}

fn require_len(op: &str, line: &[Coord], min: usize) -> PyResult<()> {
    if line.len() < min {
        return Err(PyValueError::new_err(format!(
            "{op}: line needs at least {min} point(s), got {}",
            line.len()
        )));
    }
    Ok(())
}

/// Fast approximate geodesic measurements near a reference latitude.
///
/// Args:
///     lat: Reference latitude in degrees.
///     units: Output unit name. Defaults to "kilometers".
#[pyclass(name = "CheapRuler", module = "_rust", frozen)]
pub struct PyCheapRuler {
    inner: CheapRuler,
}

#[pymethods]
impl PyCheapRuler {
    #[new]
    #[pyo3(signature = (lat, units="kilometers"))]
    fn new(lat: f64, units: &str) -> PyResult<Self> {
        let inner = CheapRuler::with_unit_name(lat, units).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    #[getter]
    fn kx(&self) -> f64 {
        self.inner.kx()
    }

    #[getter]
    fn ky(&self) -> f64 {
        self.inner.ky()
    }

    #[getter]
    fn units(&self) -> &'static str {
        self.inner.unit().name()
    }

    fn distance(&self, a: Coord, b: Coord) -> f64 {
        self.inner.distance(a.into(), b.into())
    }

    fn bearing(&self, a: Coord, b: Coord) -> f64 {
        self.inner.bearing(a.into(), b.into())
    }

    fn destination(&self, p: Coord, dist: f64, bearing: f64) -> Coord {
        self.inner.destination(p.into(), dist, bearing).to_tuple()
    }

    fn line_distance(&self, points: Vec<Coord>) -> f64 {
        self.inner.line_distance(&to_points(&points))
    }

    fn area(&self, polygon: Vec<Vec<Coord>>) -> f64 {
        let rings: Vec<Vec<Point>> = polygon.iter().map(|ring| to_points(ring)).collect();
        self.inner.area(&rings)
    }

    fn along(&self, line: Vec<Coord>, dist: f64) -> PyResult<Coord> {
        require_len("along", &line, 1)?;
        Ok(self.inner.along(&to_points(&line), dist).to_tuple())
    }

    /// Returns a dict with keys `point`, `index` and `t`.
    fn point_on_line<'py>(
        &self,
        py: Python<'py>,
        line: Vec<Coord>,
        p: Coord,
    ) -> PyResult<Bound<'py, PyDict>> {
        require_len("point_on_line", &line, 2)?;
        let res = self.inner.point_on_line(&to_points(&line), p.into());
        let dict = PyDict::new(py);
        dict.set_item("point", res.point.to_tuple())?;
        dict.set_item("index", res.index)?;
        dict.set_item("t", res.t)?;
        Ok(dict)
    }

    fn line_slice(&self, start: Coord, stop: Coord, line: Vec<Coord>) -> PyResult<Vec<Coord>> {
        require_len("line_slice", &line, 2)?;
        let slice = self
            .inner
            .line_slice(start.into(), stop.into(), &to_points(&line));
        Ok(tuples(&slice))
    }

    fn line_slice_along(&self, start: f64, stop: f64, line: Vec<Coord>) -> Vec<Coord> {
        tuples(&self.inner.line_slice_along(start, stop, &to_points(&line)))
    }

    fn buffer_point(&self, p: Coord, buff: f64) -> Bounds {
        self.inner.buffer_point(p.into(), buff).to_tuple()
    }

    fn buffer_bbox(&self, bbox: Bounds, buff: f64) -> Bounds {
        self.inner.buffer_bbox(BBox::from(bbox), buff).to_tuple()
    }

    fn inside_bbox(&self, p: Coord, bbox: Bounds) -> bool {
        self.inner.inside_bbox(p.into(), BBox::from(bbox))
    }

    /// Row-wise distances between (ax, ay) and (bx, by) coordinate arrays.
    fn distances<'py>(
        &self,
        py: Python<'py>,
        ax: PyReadonlyArray1<'py, f64>,
        ay: PyReadonlyArray1<'py, f64>,
        bx: PyReadonlyArray1<'py, f64>,
        by: PyReadonlyArray1<'py, f64>,
    ) -> PyResult<Bound<'py, PyArray1<f64>>> {
        super::batch::distances(py, self.inner, ax, ay, bx, by)
    }

    fn __repr__(&self) -> String {
        format!(
            "CheapRuler(kx={}, ky={}, units='{}')",
            self.inner.kx(),
            self.inner.ky(),
            self.inner.unit()
        )
    }
}

/// Create a ruler for the center latitude of tile row `y` at zoom `z`.
#[pyfunction]
#[pyo3(signature = (y, z, units="kilometers"))]
pub fn from_tile(y: u32, z: u32, units: &str) -> PyResult<PyCheapRuler> {
    let unit = Unit::from_name(units).map_err(to_py_err)?;
    Ok(PyCheapRuler {
        inner: CheapRuler::from_tile(y, z, unit),
    })
}
