//! Latitude-calibrated flat-earth ruler.
//!
//! Degrees are scaled to distance units with two per-axis factors derived from
//! WGS84 polynomial fits at a reference latitude:
//!
//!   kx = m·(111.41513·cos φ − 0.09455·cos 3φ + 0.00012·cos 5φ)
//!   ky = m·(111.13209 − 0.56605·cos 2φ + 0.0012·cos 4φ)
//!
//! Every measurement is then plain Euclidean geometry on (Δλ·kx, Δφ·ky).

use std::f64::consts::PI;

use crate::error::RulerError;
use crate::geom::{interpolate, BBox, Point, PointOnLine};
use crate::units::Unit;

/// Flat-earth projection valid near a reference latitude.
///
/// Immutable after construction; share it freely between threads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CheapRuler {
    kx: f64,
    ky: f64,
    unit: Unit,
}

impl CheapRuler {
    /// Create a ruler calibrated for latitude `lat` (degrees), measuring in `unit`.
    pub fn new(lat: f64, unit: Unit) -> Self {
        let m = unit.factor();

        // cos of 1..5 times the latitude via the Chebyshev recurrence
        let c = lat.to_radians().cos();
        let c2 = 2.0 * c * c - 1.0;
        let c3 = 2.0 * c * c2 - c;
        let c4 = 2.0 * c * c3 - c2;
        let c5 = 2.0 * c * c4 - c3;

        let kx = m * (111.41513 * c - 0.09455 * c3 + 0.00012 * c5);
        let ky = m * (111.13209 - 0.56605 * c2 + 0.0012 * c4);
        log::trace!("ruler at lat={lat} unit={unit}: kx={kx}, ky={ky}");

        Self { kx, ky, unit }
    }

    /// Like [`CheapRuler::new`], with the unit given by name (e.g. `"miles"`).
    pub fn with_unit_name(lat: f64, unit: &str) -> Result<Self, RulerError> {
        Ok(Self::new(lat, Unit::from_name(unit)?))
    }

    /// Create a ruler for the center latitude of Web-Mercator tile row `y` at zoom `z`.
    pub fn from_tile(y: u32, z: u32, unit: Unit) -> Self {
        let n = PI * (1.0 - 2.0 * (f64::from(y) + 0.5) / 2f64.powf(f64::from(z)));
        let lat = (0.5 * (n.exp() - (-n).exp())).atan().to_degrees();
        log::debug!("tile y={y} z={z} -> lat={lat}");
        Self::new(lat, unit)
    }

    /// Longitude scale: distance units per degree of longitude.
    pub fn kx(&self) -> f64 {
        self.kx
    }

    /// Latitude scale: distance units per degree of latitude.
    pub fn ky(&self) -> f64 {
        self.ky
    }

    /// Unit every measurement is returned in.
    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Distance between two points.
    pub fn distance(&self, a: Point, b: Point) -> f64 {
        let dx = (a.x - b.x) * self.kx;
        let dy = (a.y - b.y) * self.ky;
        (dx * dx + dy * dy).sqrt()
    }

    /// Bearing from `a` to `b` in degrees clockwise from north, in (-180, 180].
    ///
    /// Coincident points have bearing 0.
    pub fn bearing(&self, a: Point, b: Point) -> f64 {
        let dx = (b.x - a.x) * self.kx;
        let dy = (b.y - a.y) * self.ky;
        if dx == 0.0 && dy == 0.0 {
            return 0.0;
        }
        let bearing = (-dy).atan2(dx).to_degrees() + 90.0;
        if bearing > 180.0 {
            bearing - 360.0
        } else {
            bearing
        }
    }

    /// Point reached by travelling `dist` from `p` along `bearing` (degrees).
    pub fn destination(&self, p: Point, dist: f64, bearing: f64) -> Point {
        let a = (90.0 - bearing).to_radians();
        Point::new(
            p.x + a.cos() * dist / self.kx,
            p.y + a.sin() * dist / self.ky,
        )
    }

    /// Total length of a polyline. Zero for fewer than two points.
    pub fn line_distance(&self, points: &[Point]) -> f64 {
        points
            .windows(2)
            .map(|seg| self.distance(seg[0], seg[1]))
            .sum()
    }

    /// Raw shoelace accumulation over all rings of a polygon, in squared degrees.
    ///
    /// Ring 0 is the outer boundary; later rings are holes and contribute with the
    /// opposite sign. The sum is neither scaled nor normalized: a counter-clockwise outer
    /// ring yields a negative value. Multiply `abs()` by `kx * ky / 2` for the area in
    /// squared units.
    pub fn area<R: AsRef<[Point]>>(&self, polygon: &[R]) -> f64 {
        let mut sum = 0.0;
        for (i, ring) in polygon.iter().enumerate() {
            let ring = ring.as_ref();
            let Some(&last) = ring.last() else {
                continue;
            };
            let sign = if i > 0 { -1.0 } else { 1.0 };
            let mut prev = last;
            for &p in ring {
                sum += (p.x - prev.x) * (p.y + prev.y) * sign;
                prev = p;
            }
        }
        sum
    }

    /// Point at distance `dist` along the line.
    ///
    /// Returns the first point for `dist <= 0` and the last point when `dist` exceeds
    /// the line length.
    ///
    /// # Panics
    /// If `line` is empty.
    pub fn along(&self, line: &[Point], dist: f64) -> Point {
        assert!(!line.is_empty(), "along: line must not be empty");
        if dist <= 0.0 {
            return line[0];
        }

        let mut sum = 0.0;
        for seg in line.windows(2) {
            let (p0, p1) = (seg[0], seg[1]);
            let d = self.distance(p0, p1);
            sum += d;
            if sum > dist {
                return interpolate(p0, p1, (dist - (sum - d)) / d);
            }
        }

        line[line.len() - 1]
    }

    /// Closest location on `line` to `p`.
    ///
    /// Projection runs in scaled space so it follows the same metric as
    /// [`CheapRuler::distance`]. A parameter above 1 snaps to the segment end and a
    /// parameter at or below 0 keeps the segment start; either way `t` is reported
    /// as computed. Ties go to the earlier segment.
    ///
    /// # Panics
    /// If `line` has fewer than two points.
    pub fn point_on_line(&self, line: &[Point], p: Point) -> PointOnLine {
        assert!(
            line.len() >= 2,
            "point_on_line: line needs at least two points, got {}",
            line.len()
        );

        let mut min_dist = f64::INFINITY;
        let mut best = PointOnLine {
            point: line[0],
            index: 0,
            t: 0.0,
        };

        for (i, seg) in line.windows(2).enumerate() {
            let mut x = seg[0].x;
            let mut y = seg[0].y;
            let dx = (seg[1].x - x) * self.kx;
            let dy = (seg[1].y - y) * self.ky;
            let mut t = 0.0;

            // Zero-length segments keep t = 0 and measure from their start
            if dx != 0.0 || dy != 0.0 {
                t = ((p.x - x) * self.kx * dx + (p.y - y) * self.ky * dy) / (dx * dx + dy * dy);

                if t > 1.0 {
                    x = seg[1].x;
                    y = seg[1].y;
                } else if t > 0.0 {
                    x += dx / self.kx * t;
                    y += dy / self.ky * t;
                }
            }

            let dx = (p.x - x) * self.kx;
            let dy = (p.y - y) * self.ky;
            let sq_dist = dx * dx + dy * dy;
            if sq_dist < min_dist {
                min_dist = sq_dist;
                best = PointOnLine {
                    point: Point::new(x, y),
                    index: i,
                    t,
                };
            }
        }

        best
    }

    /// Part of `line` between the projections of `start` and `stop`.
    ///
    /// The slice always runs in line order, whichever of the two points comes first.
    ///
    /// # Panics
    /// If `line` has fewer than two points.
    pub fn line_slice(&self, start: Point, stop: Point, line: &[Point]) -> Vec<Point> {
        let mut p1 = self.point_on_line(line, start);
        let mut p2 = self.point_on_line(line, stop);

        if p1.index > p2.index || (p1.index == p2.index && p1.t > p2.t) {
            std::mem::swap(&mut p1, &mut p2);
        }

        let mut slice = vec![p1.point];

        let l = p1.index + 1;
        let r = p2.index;

        if line[l] != slice[0] && l <= r {
            slice.push(line[l]);
        }
        if r > l {
            slice.extend_from_slice(&line[l + 1..=r]);
        }
        if line[r] != p2.point {
            slice.push(p2.point);
        }

        slice
    }

    /// Part of `line` between distances `start` and `stop` from its first point.
    ///
    /// Stops as soon as `stop` is reached. When the line is shorter than `stop`, the
    /// slice ends at the last vertex past `start`.
    pub fn line_slice_along(&self, start: f64, stop: f64, line: &[Point]) -> Vec<Point> {
        let mut sum = 0.0;
        let mut slice = Vec::new();

        for seg in line.windows(2) {
            let (p0, p1) = (seg[0], seg[1]);
            let d = self.distance(p0, p1);
            sum += d;

            if sum > start && slice.is_empty() {
                slice.push(interpolate(p0, p1, (start - (sum - d)) / d));
            }
            if sum >= stop {
                slice.push(interpolate(p0, p1, (stop - (sum - d)) / d));
                return slice;
            }
            if sum > start {
                slice.push(p1);
            }
        }

        slice
    }

    /// Box around `p` padded by `buff` units on each axis.
    pub fn buffer_point(&self, p: Point, buff: f64) -> BBox {
        let v = buff / self.ky;
        let h = buff / self.kx;
        BBox::new(p.x - h, p.y - v, p.x + h, p.y + v)
    }

    /// `bbox` grown by `buff` units on each side.
    pub fn buffer_bbox(&self, bbox: BBox, buff: f64) -> BBox {
        let v = buff / self.ky;
        let h = buff / self.kx;
        BBox::new(
            bbox.min_x - h,
            bbox.min_y - v,
            bbox.max_x + h,
            bbox.max_y + v,
        )
    }

    /// Whether `p` lies in `bbox`, edges included.
    pub fn inside_bbox(&self, p: Point, bbox: BBox) -> bool {
        p.x >= bbox.min_x && p.x <= bbox.max_x && p.y >= bbox.min_y && p.y <= bbox.max_y
    }
}
