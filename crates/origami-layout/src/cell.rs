//! The contract between a concrete pattern and the replication engine.

use origami_geometry::primitives::hline;
use origami_geometry::{Path, PathMap, PathTree, Point, Style};

use crate::error::LayoutError;
use crate::params::Derived;

/// One row-unit of a cylindrical tessellation, as authored by a pattern.
///
/// Per-row sequences are indexed by row, top row first. Every `edge_left` path runs from the
/// row's local origin (top) to its far corner (bottom); every `edge_right` path runs bottom
/// to top. Either edge list may be omitted and is then derived from the other.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    pub divider: Option<Path>,
    pub edge_left: Option<Vec<Path>>,
    /// Leave this `None` unless the right side differs from the left. A derived right edge
    /// is rebuilt from the placed left edge, so the outline closes exactly; an authored one
    /// is only translated and can miss its neighbour by rounding.
    pub edge_right: Option<Vec<Path>>,
    pub interior: Vec<PathTree>,
}

/// Implemented by every replicated (cylindrical) pattern.
pub trait CellGenerator {
    /// Circumscribed radius of the cross-section polygon.
    fn radius(&self) -> f64;

    fn cell(&self, layout: &Derived) -> Result<Cell, LayoutError>;

    /// Explicit vertex markers. `None` lets the engine collect them from the geometry.
    fn vertices(&self, _layout: &Derived) -> Option<Vec<Point>> {
        None
    }
}

/// A cell with every derivable field filled in and its per-row lists cut to `rows`.
#[derive(Debug, Clone)]
pub struct ResolvedCell {
    pub divider: Path,
    /// Horizontal extent of the divider; the full circumference of one row.
    pub width: f64,
    pub edge_left: Vec<Path>,
    pub edge_right: Vec<Path>,
    /// `edge_right` was derived from `edge_left` rather than authored.
    pub right_derived: bool,
    pub interior: Vec<PathTree>,
}

impl Cell {
    pub fn resolve(self, rows: usize) -> Result<ResolvedCell, LayoutError> {
        let divider = match self.divider {
            Some(d) => d,
            None => derive_divider(&self.interior).ok_or(LayoutError::MissingDivider)?,
        };
        let width = x_extent(&divider.points);

        let (edge_left, edge_right, right_derived) = match (self.edge_left, self.edge_right) {
            (None, None) => return Err(LayoutError::UnderSpecifiedCell),
            (Some(left), Some(right)) => (left, right, false),
            (Some(left), None) => {
                let right = left.translated((width, 0.0)).inverted_all();
                (left, right, true)
            }
            (None, Some(right)) => {
                let left = right.translated((-width, 0.0)).inverted_all();
                (left, right, false)
            }
        };

        let edge_left = take_rows("edge_left", edge_left, rows)?;
        let edge_right = take_rows("edge_right", edge_right, rows)?;
        for path in std::iter::once(&divider).chain(&edge_left).chain(&edge_right) {
            path.validate()?;
        }
        let interior = take_rows("interior", self.interior, rows)?;

        Ok(ResolvedCell {
            divider,
            width,
            edge_left,
            edge_right,
            right_derived,
            interior,
        })
    }
}

fn take_rows<T>(field: &'static str, mut items: Vec<T>, rows: usize) -> Result<Vec<T>, LayoutError> {
    if items.len() < rows {
        return Err(LayoutError::RowCountMismatch {
            field,
            expected: rows,
            found: items.len(),
        });
    }
    items.truncate(rows);
    Ok(items)
}

/// Mountain line spanning every interior point that lies on `y = 0`.
fn derive_divider(interior: &[PathTree]) -> Option<Path> {
    let xs: Vec<f64> = interior
        .iter()
        .flat_map(|t| t.paths())
        .flat_map(|p| p.points.iter())
        .filter(|p| p.y == 0.0)
        .map(|p| p.x)
        .collect();
    let min = xs.iter().copied().reduce(f64::min)?;
    let max = xs.iter().copied().reduce(f64::max)?;
    Some(hline(min, max, 0.0, Style::Mountain))
}

fn x_extent(points: &[Point]) -> f64 {
    let min = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    if min.is_finite() && max.is_finite() {
        max - min
    } else {
        0.0
    }
}

impl ResolvedCell {
    /// Interior of row `i` moved to `origin`.
    #[must_use]
    pub fn interior_at(&self, i: usize, origin: Point) -> PathTree {
        self.interior[i].translated(origin)
    }

    /// Left edge of row `i` moved to `origin`.
    #[must_use]
    pub fn left_at(&self, i: usize, origin: Point) -> Path {
        self.edge_left[i].translate(origin)
    }

    /// Right edge of row `i` moved to `origin`. A derived right edge is rebuilt from the
    /// placed left edge so both sides of a row boundary share the same arithmetic.
    #[must_use]
    pub fn right_at(&self, i: usize, origin: Point) -> Path {
        if self.right_derived {
            self.left_at(i, origin).translate((self.width, 0.0)).inverted()
        } else {
            self.edge_right[i].translate(origin)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use origami_geometry::GeometryError;

    fn zigzag() -> PathTree {
        PathTree::from(vec![
            Path::line((0.0, 0.0), (1.0, 2.0), Style::Valley),
            Path::line((1.0, 2.0), (2.0, 0.0), Style::Mountain),
            Path::line((2.0, 0.0), (3.0, 2.0), Style::Valley),
        ])
    }

    fn left_edges(rows: usize) -> Vec<Path> {
        vec![Path::line((0.0, 0.0), (1.0, 2.0), Style::Edge); rows]
    }

    #[test]
    fn derives_divider_and_right_edges() {
        let cell = Cell {
            edge_left: Some(left_edges(2)),
            interior: vec![zigzag(); 2],
            ..Cell::default()
        };
        let resolved = cell.resolve(2).unwrap();
        assert_eq!(
            resolved.divider,
            Path::line((0.0, 0.0), (2.0, 0.0), Style::Mountain)
        );
        assert_eq!(resolved.width, 2.0);
        assert_eq!(
            resolved.edge_right[0].points,
            vec![Point::new(3.0, 2.0), Point::new(2.0, 0.0)]
        );
    }

    #[test]
    fn derives_left_edges_from_right() {
        let cell = Cell {
            divider: Some(Path::line((0.0, 0.0), (4.0, 0.0), Style::Mountain)),
            edge_right: Some(vec![Path::line((5.0, 2.0), (4.0, 0.0), Style::Edge)]),
            interior: vec![PathTree::empty()],
            ..Cell::default()
        };
        let resolved = cell.resolve(1).unwrap();
        assert_eq!(
            resolved.edge_left[0].points,
            vec![Point::new(0.0, 0.0), Point::new(1.0, 2.0)]
        );
    }

    #[test]
    fn missing_edges_is_fatal() {
        let cell = Cell {
            interior: vec![zigzag()],
            ..Cell::default()
        };
        assert_eq!(cell.resolve(1).unwrap_err(), LayoutError::UnderSpecifiedCell);
    }

    #[test]
    fn missing_divider_without_baseline_points() {
        let cell = Cell {
            edge_left: Some(left_edges(1)),
            interior: vec![PathTree::from(vec![Path::line((0.0, 1.0), (1.0, 1.0), Style::Valley)])],
            ..Cell::default()
        };
        assert_eq!(cell.resolve(1).unwrap_err(), LayoutError::MissingDivider);
    }

    #[test]
    fn short_row_lists_are_rejected() {
        let cell = Cell {
            edge_left: Some(left_edges(2)),
            interior: vec![zigzag(); 1],
            ..Cell::default()
        };
        assert_eq!(
            cell.resolve(2).unwrap_err(),
            LayoutError::RowCountMismatch {
                field: "interior",
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn single_point_edges_are_rejected() {
        let cell = Cell {
            edge_left: Some(vec![Path::new([(0.0, 0.0)], Style::Edge)]),
            interior: vec![zigzag()],
            ..Cell::default()
        };
        assert!(matches!(
            cell.resolve(1).unwrap_err(),
            LayoutError::Geometry(GeometryError::PointCount { found: 1, .. })
        ));
    }
}
