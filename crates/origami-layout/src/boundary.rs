//! Fusing per-row edges and band corner stubs into the single outer outline.

use origami_geometry::{outline, GeometryError, Path, Point, Style};

use crate::cell::ResolvedCell;
use crate::engine::RowPlacement;
use crate::params::Derived;

/// The outline as the ordered list of edge pieces it was stitched from. Consecutive pieces
/// share endpoints; the last piece returns to the start of the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    pub pieces: Vec<Path>,
}

impl Boundary {
    /// Ordered outline points, shared endpoints merged and the closing point dropped.
    #[must_use]
    pub fn outline(&self) -> Vec<Point> {
        outline::join(&self.pieces)
    }

    pub fn check_continuity(&self) -> Result<(), GeometryError> {
        outline::check_continuity(&self.pieces)
    }
}

struct Walk {
    pieces: Vec<Path>,
}

impl Walk {
    fn end(&self) -> Option<Point> {
        self.pieces.last().and_then(Path::last)
    }

    fn push(&mut self, piece: Path) {
        self.pieces.push(piece);
    }

    fn edge(&mut self, from: Point, to: Point) {
        self.pieces.push(Path::line(from, to, Style::Edge));
    }

    /// Straight edge from the current end to `to`, skipped when it would have zero length.
    fn bridge(&mut self, to: Point) {
        if let Some(from) = self.end() {
            if from != to {
                self.edge(from, to);
            }
        }
    }
}

/// Walk the outline: down the left side row by row, across the bottom, up the right side
/// row by row and back across the top.
///
/// Band stubs are built from the endpoints of the placed row edges so they always connect
/// exactly. Authored right edges are placed by translation and meet their neighbours only
/// if the cell's arithmetic agrees; derived ones always do.
#[must_use]
pub fn stitch(layout: &Derived, cell: &ResolvedCell, rows: &RowPlacement) -> Boundary {
    let base = layout.base_height();
    let n = layout.rows;
    let mut walk = Walk { pieces: Vec::new() };

    let left: Vec<Path> = (0..n).map(|i| cell.left_at(i, rows.origins[i])).collect();
    let right: Vec<Path> = (0..n).map(|i| cell.right_at(i, rows.origins[i])).collect();

    if layout.base.is_some() {
        let top = rows.origins[0];
        walk.edge(Point::new(top.x, 0.0), top);
    }

    for (i, edge) in left.iter().enumerate() {
        walk.push(edge.clone());
        if layout.middle.is_some() && i + 1 < n {
            walk.bridge(rows.origins[i + 1]);
        }
    }

    let bottom_right = right[n - 1].first().unwrap_or(rows.bottoms[n - 1]);
    if layout.base.is_some() {
        let corner = rows.bottoms[n - 1];
        walk.edge(corner, corner + Point::new(0.0, base));
        walk.bridge(bottom_right + Point::new(0.0, base));
        walk.bridge(bottom_right);
    } else {
        walk.bridge(bottom_right);
    }

    for i in (0..n).rev() {
        walk.push(right[i].clone());
        if layout.middle.is_some() && i > 0 {
            if let Some(next) = right[i - 1].first() {
                walk.bridge(next);
            }
        }
    }

    if layout.base.is_some() {
        if let Some(top_right) = walk.end() {
            walk.edge(top_right, Point::new(top_right.x, 0.0));
        }
    }

    if let Some(start) = walk.pieces.first().and_then(Path::first) {
        walk.bridge(start);
    }

    Boundary { pieces: walk.pieces }
}
