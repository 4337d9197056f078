use std::f64::consts::PI;

use crate::{Path, Point, Style};

/// Corners of an axis-aligned rectangle with one corner at `origin`, listed
/// `origin, +height, +width+height, +width`.
#[must_use]
pub fn rectangle(origin: impl Into<Point>, width: f64, height: f64) -> Vec<Point> {
    let o = origin.into();
    vec![
        o,
        Point::new(o.x, o.y + height),
        Point::new(o.x + width, o.y + height),
        Point::new(o.x + width, o.y),
    ]
}

#[must_use]
pub fn square(side: f64) -> Vec<Point> {
    rectangle(Point::ORIGIN, side, side)
}

/// Length of one side of a regular polygon with `sides` vertices on a circle of `radius`.
#[must_use]
pub fn polygon_side(radius: f64, sides: u32) -> f64 {
    2.0 * radius * (PI / f64::from(sides)).sin()
}

/// `count` copies of `path` stepped by `pitch`.
#[must_use]
pub fn repeat(path: &Path, pitch: impl Into<Point>, count: usize) -> Vec<Path> {
    let pitch = pitch.into();
    (0..count)
        .map(|i| path.translate(pitch * i as f64))
        .collect()
}

/// Horizontal line of `style` from `(x0, y)` to `(x1, y)`.
#[must_use]
pub fn hline(x0: f64, x1: f64, y: f64, style: Style) -> Path {
    Path::line((x0, y), (x1, y), style)
}
