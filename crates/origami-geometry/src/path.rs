use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{GeometryError, Point};

/// Fold-or-cut classification of a path. Only meaningful to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Mountain,
    Valley,
    Universal,
    Semicrease,
    Cut,
    Edge,
    #[serde(rename = "point")]
    PointMarker,
}

impl Style {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Style::Mountain => "mountain",
            Style::Valley => "valley",
            Style::Universal => "universal",
            Style::Semicrease => "semicrease",
            Style::Cut => "cut",
            Style::Edge => "edge",
            Style::PointMarker => "point",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A typed polyline. Paths are built once by a generator and afterwards only copied with a
/// transform applied; every method here returns a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub points: Vec<Point>,
    pub style: Style,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub closed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fold_angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

impl Path {
    /// Open polyline through `points`.
    #[must_use]
    pub fn new<P: Into<Point>>(points: impl IntoIterator<Item = P>, style: Style) -> Self {
        Self {
            points: points.into_iter().map(Into::into).collect(),
            style,
            closed: false,
            fold_angle: None,
            radius: None,
        }
    }

    /// Straight segment from `a` to `b`.
    #[must_use]
    pub fn line(a: impl Into<Point>, b: impl Into<Point>, style: Style) -> Self {
        Self::new([a.into(), b.into()], style)
    }

    /// Single-point vertex marker drawn as a dot of `radius`.
    #[must_use]
    pub fn marker(at: impl Into<Point>, radius: f64) -> Self {
        Self {
            points: vec![at.into()],
            style: Style::PointMarker,
            closed: false,
            fold_angle: None,
            radius: Some(radius),
        }
    }

    #[must_use]
    pub fn closed(mut self) -> Self {
        self.closed = true;
        self
    }

    #[must_use]
    pub fn with_fold_angle(mut self, degrees: f64) -> Self {
        self.fold_angle = Some(degrees);
        self
    }

    /// Line styles need two or more points, point markers exactly one.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let n = self.points.len();
        match self.style {
            Style::PointMarker if n != 1 => Err(GeometryError::PointCount {
                style: self.style.name(),
                expected: "exactly 1",
                found: n,
            }),
            Style::PointMarker => Ok(()),
            _ if n < 2 => Err(GeometryError::PointCount {
                style: self.style.name(),
                expected: "at least 2",
                found: n,
            }),
            _ => Ok(()),
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Vector from the first to the last point.
    #[must_use]
    pub fn displacement(&self) -> Point {
        match (self.first(), self.last()) {
            (Some(a), Some(b)) => b - a,
            _ => Point::ORIGIN,
        }
    }

    #[must_use]
    pub fn translate(&self, delta: impl Into<Point>) -> Self {
        let delta = delta.into();
        self.with_points(self.points.iter().map(|&p| p + delta).collect())
    }

    /// Scale about the origin.
    #[must_use]
    pub fn scale(&self, k: f64) -> Self {
        self.with_points(self.points.iter().map(|&p| p * k).collect())
    }

    /// Mirror across the infinite line through `p` and `q`.
    pub fn reflect(&self, p: impl Into<Point>, q: impl Into<Point>) -> Result<Self, GeometryError> {
        let (p, q) = (p.into(), q.into());
        let points = self
            .points
            .iter()
            .map(|v| v.reflect(p, q).ok_or(GeometryError::DegenerateLine { at: p }))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(self.with_points(points))
    }

    /// Same path traversed in the opposite direction.
    #[must_use]
    pub fn inverted(&self) -> Self {
        self.with_points(self.points.iter().rev().copied().collect())
    }

    fn with_points(&self, points: Vec<Point>) -> Self {
        Self {
            points,
            style: self.style,
            closed: self.closed,
            fold_angle: self.fold_angle,
            radius: self.radius,
        }
    }
}
