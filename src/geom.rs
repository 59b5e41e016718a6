/// A geographic coordinate: `x` is longitude, `y` is latitude, both in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_tuple(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Axis-aligned box in degrees: (min_x, min_y, max_x, max_y).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn to_tuple(&self) -> (f64, f64, f64, f64) {
        (self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

impl From<(f64, f64, f64, f64)> for BBox {
    fn from((min_x, min_y, max_x, max_y): (f64, f64, f64, f64)) -> Self {
        Self::new(min_x, min_y, max_x, max_y)
    }
}

/// Closest location on a polyline to some query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointOnLine {
    /// Location on the line.
    pub point: Point,
    /// Index of the segment start vertex.
    pub index: usize,
    /// Projection parameter along the segment, as computed. Values above 1 mean the
    /// segment end was used; values <= 0 mean the segment start was used.
    pub t: f64,
}

/// Linear interpolation `a + (b - a) * t`. `t` is not restricted to [0, 1].
pub fn interpolate(a: Point, b: Point, t: f64) -> Point {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    Point::new(a.x + dx * t, a.y + dy * t)
}
