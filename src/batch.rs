//! Array-oriented evaluation of ruler operations.
//!
//! Coordinates are `(n, 2)` arrays with longitude in column 0 and latitude in
//! column 1. Results match the scalar operations element-wise.

use ndarray::{Array1, ArrayView2};
use rayon::prelude::*;

use crate::error::RulerError;
use crate::geom::{BBox, Point};
use crate::ruler::CheapRuler;

fn check_coords(name: &str, coords: &ArrayView2<'_, f64>) -> Result<usize, RulerError> {
    let (rows, cols) = coords.dim();
    if cols != 2 {
        return Err(RulerError::Shape(format!(
            "{name} must have shape (n, 2), got ({rows}, {cols})"
        )));
    }
    Ok(rows)
}

fn check_pair(a: &ArrayView2<'_, f64>, b: &ArrayView2<'_, f64>) -> Result<usize, RulerError> {
    let n = check_coords("a", a)?;
    let m = check_coords("b", b)?;
    if n != m {
        return Err(RulerError::Shape(format!(
            "a and b must have same length, got {n} and {m}"
        )));
    }
    Ok(n)
}

#[inline]
fn row(coords: &ArrayView2<'_, f64>, i: usize) -> Point {
    Point::new(coords[(i, 0)], coords[(i, 1)])
}

impl CheapRuler {
    /// Row-wise distances between two coordinate arrays.
    pub fn distances(
        &self,
        a: &ArrayView2<'_, f64>,
        b: &ArrayView2<'_, f64>,
    ) -> Result<Array1<f64>, RulerError> {
        let n = check_pair(a, b)?;
        Ok(Array1::from_shape_fn(n, |i| {
            self.distance(row(a, i), row(b, i))
        }))
    }

    /// Parallel version of [`CheapRuler::distances`].
    pub fn par_distances(
        &self,
        a: &ArrayView2<'_, f64>,
        b: &ArrayView2<'_, f64>,
    ) -> Result<Array1<f64>, RulerError> {
        let n = check_pair(a, b)?;
        log::debug!(
            "par_distances: {n} pairs on {} threads",
            rayon::current_num_threads()
        );
        let out: Vec<f64> = (0..n)
            .into_par_iter()
            .map(|i| self.distance(row(a, i), row(b, i)))
            .collect();
        Ok(Array1::from(out))
    }

    /// Row-wise bearings from `a` to `b`.
    pub fn bearings(
        &self,
        a: &ArrayView2<'_, f64>,
        b: &ArrayView2<'_, f64>,
    ) -> Result<Array1<f64>, RulerError> {
        let n = check_pair(a, b)?;
        Ok(Array1::from_shape_fn(n, |i| self.bearing(row(a, i), row(b, i))))
    }

    /// Length of every segment of a polyline; empty for fewer than two vertices.
    pub fn segment_distances(&self, line: &ArrayView2<'_, f64>) -> Result<Array1<f64>, RulerError> {
        let n = check_coords("line", line)?;
        let segments = n.saturating_sub(1);
        Ok(Array1::from_shape_fn(segments, |i| {
            self.distance(row(line, i), row(line, i + 1))
        }))
    }

    /// Containment mask of points in `bbox`, edges included.
    pub fn inside_bbox_mask(
        &self,
        points: &ArrayView2<'_, f64>,
        bbox: BBox,
    ) -> Result<Array1<bool>, RulerError> {
        let n = check_coords("points", points)?;
        Ok(Array1::from_shape_fn(n, |i| {
            self.inside_bbox(row(points, i), bbox)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;
    use approx::assert_relative_eq;
    use ndarray::{array, Array2};

    fn ruler() -> CheapRuler {
        CheapRuler::new(32.8351, Unit::Kilometers)
    }

    fn grid(n: usize, offset: f64) -> Array2<f64> {
        Array2::from_shape_fn((n, 2), |(i, j)| {
            if j == 0 {
                -96.9 + 0.001 * i as f64 + offset
            } else {
                32.8 - 0.0007 * i as f64 + offset
            }
        })
    }

    #[test]
    fn test_distances_match_scalar() {
        let r = ruler();
        let a = grid(50, 0.0);
        let b = grid(50, 0.003);
        let d = r.distances(&a.view(), &b.view()).unwrap();
        assert_eq!(d.len(), 50);
        for i in 0..50 {
            let expected = r.distance(
                Point::new(a[(i, 0)], a[(i, 1)]),
                Point::new(b[(i, 0)], b[(i, 1)]),
            );
            assert_relative_eq!(d[i], expected);
        }
    }

    #[test]
    fn test_par_distances_match_sequential() {
        let r = ruler();
        let a = grid(1000, 0.0);
        let b = grid(1000, -0.01);
        let seq = r.distances(&a.view(), &b.view()).unwrap();
        let par = r.par_distances(&a.view(), &b.view()).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_bearings() {
        let r = ruler();
        let a = array![[30.5, 32.8351], [30.5, 32.8351]];
        let b = array![[30.5, 32.8351], [30.6, 32.8351]];
        let out = r.bearings(&a.view(), &b.view()).unwrap();
        assert_eq!(out[0], 0.0);
        assert_relative_eq!(out[1], 90.0, epsilon = 1e-12);
    }

    #[test]
    fn test_shape_mismatch() {
        let r = ruler();
        let a = grid(3, 0.0);
        let b = grid(4, 0.0);
        let err = r.distances(&a.view(), &b.view()).unwrap_err();
        assert!(matches!(err, RulerError::Shape(_)));

        let bad = Array2::<f64>::zeros((3, 3));
        assert!(r.par_distances(&bad.view(), &bad.view()).is_err());
        assert!(r.segment_distances(&bad.view()).is_err());
    }

    #[test]
    fn test_segment_distances_sum_to_line_distance() {
        let r = ruler();
        let line = grid(20, 0.0);
        let segs = r.segment_distances(&line.view()).unwrap();
        assert_eq!(segs.len(), 19);
        let pts: Vec<Point> = line.rows().into_iter().map(|p| Point::new(p[0], p[1])).collect();
        assert_relative_eq!(segs.sum(), r.line_distance(&pts), max_relative = 1e-12);

        let single = Array2::<f64>::zeros((1, 2));
        assert!(r.segment_distances(&single.view()).unwrap().is_empty());
    }

    #[test]
    fn test_inside_bbox_mask() {
        let r = ruler();
        let pts = array![[0.0, 0.0], [1.0, 1.0], [2.0, 0.5], [0.5, 0.5]];
        let mask = r
            .inside_bbox_mask(&pts.view(), BBox::new(0.0, 0.0, 1.0, 1.0))
            .unwrap();
        assert_eq!(mask.to_vec(), vec![true, true, false, true]);
    }
}
