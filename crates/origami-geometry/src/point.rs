use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A 2D coordinate. Equality is exact; vertices shared between paths must be produced by the
/// same arithmetic to compare equal.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn dot(self, other: Point) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Mirror this point across the infinite line through `p` and `q`.
    ///
    /// Horizontal and vertical lines use the closed form `2c - v`, which keeps mirrored
    /// vertices bit-identical to their counterparts whenever the inputs are. Any other line
    /// goes through a projection and is only accurate to rounding: reflecting twice across an
    /// oblique line generally does not return the exact starting point, so shared vertices
    /// across such a line must come from the same reflected value. `p == q` has no defined
    /// mirror line and returns `None`.
    #[must_use]
    pub fn reflect(self, p: Point, q: Point) -> Option<Point> {
        let d = q - p;
        if d.x == 0.0 && d.y == 0.0 {
            return None;
        }
        if d.y == 0.0 {
            return Some(Point::new(self.x, 2.0 * p.y - self.y));
        }
        if d.x == 0.0 {
            return Some(Point::new(2.0 * p.x - self.x, self.y));
        }
        let t = (self - p).dot(d) / d.dot(d);
        let foot = p + d * t;
        Some(foot * 2.0 - self)
    }

    /// Hashable identity used for exact deduplication. `-0.0` and `0.0` share a key.
    #[must_use]
    pub fn key(self) -> PointKey {
        PointKey(canonical_bits(self.x), canonical_bits(self.y))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointKey(u64, u64);

fn canonical_bits(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}
