use origami_geometry::{flatten, outline, split, GeometryError, Path, PathTree, Point, Style};
use serde::{Deserialize, Serialize};

use crate::error::ParamWarning;

/// A generated pattern, ready for a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct Pattern {
    /// Creases, cuts and slots, grouped for rendering. The outline is kept separately.
    pub tree: PathTree,
    /// Closed outer outline.
    pub boundary: Vec<Point>,
    /// The edge pieces `boundary` was stitched from.
    #[serde(skip)]
    pub boundary_pieces: Vec<Path>,
    /// Distinct crease vertices.
    pub vertices: Vec<Point>,
    pub warnings: Vec<ParamWarning>,
}

/// How the outline is emitted as edge paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeMode {
    /// One closed path.
    #[default]
    Single,
    /// One path per outline segment.
    Split,
}

impl Pattern {
    /// Both outline checks: every stitched piece meets the next, and the outline is a
    /// closed polygon without zero-length edges.
    pub fn check_boundary(&self) -> Result<(), GeometryError> {
        outline::check_continuity(&self.boundary_pieces)?;
        outline::check_closed(&self.boundary)
    }

    pub fn edges(&self, mode: EdgeMode) -> Result<Vec<Path>, GeometryError> {
        if self.boundary.is_empty() {
            return Ok(Vec::new());
        }
        match mode {
            EdgeMode::Single => Ok(vec![Path::new(self.boundary.clone(), Style::Edge).closed()]),
            EdgeMode::Split => split(&self.boundary, &[Style::Edge], true),
        }
    }

    #[must_use]
    pub fn vertex_markers(&self, radius: f64) -> Vec<Path> {
        self.vertices
            .iter()
            .map(|&p| Path::marker(p, radius))
            .collect()
    }

    /// Final drawing tree: the pattern's groups, then the vertex markers, then the outline.
    pub fn assemble(&self, vertex_radius: f64, mode: EdgeMode) -> Result<PathTree, GeometryError> {
        let mut tree = self.tree.clone();
        tree.push(PathTree::from(self.vertex_markers(vertex_radius)));
        tree.push(PathTree::from(self.edges(mode)?));
        Ok(tree)
    }
}

/// Implemented by single-motif patterns that are not replicated around a cylinder.
pub trait FlatPattern {
    /// Outer outline and the crease tree.
    fn layout(&self) -> (Vec<Point>, PathTree);

    /// Explicit vertex markers. `None` collects them from the creases and the outline.
    fn vertices(&self) -> Option<Vec<Point>> {
        None
    }
}

#[must_use]
pub fn generate_flat<P: FlatPattern + ?Sized>(pattern: &P) -> Pattern {
    let (boundary, tree) = pattern.layout();
    let boundary_pieces = (0..boundary.len())
        .map(|i| {
            Path::line(
                boundary[i],
                boundary[(i + 1) % boundary.len()],
                Style::Edge,
            )
        })
        .collect();
    let vertices = pattern
        .vertices()
        .unwrap_or_else(|| collect_vertices(&tree, &boundary));
    Pattern {
        tree,
        boundary,
        boundary_pieces,
        vertices,
        warnings: Vec::new(),
    }
}

/// Distinct vertices of `tree` and `boundary` together.
#[must_use]
pub fn collect_vertices(tree: &PathTree, boundary: &[Point]) -> Vec<Point> {
    let mut all = tree.clone();
    all.push(Path::new(boundary.to_vec(), Style::Edge));
    flatten(&all)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Unit;

    impl FlatPattern for Unit {
        fn layout(&self) -> (Vec<Point>, PathTree) {
            let square = origami_geometry::primitives::square(1.0);
            let crease = Path::line((0.0, 0.0), (1.0, 1.0), Style::Valley);
            (square, PathTree::from(vec![crease]))
        }
    }

    #[test]
    fn flat_pattern_boundary_is_closed() {
        let p = generate_flat(&Unit);
        assert!(p.check_boundary().is_ok());
        assert_eq!(p.vertices.len(), 4);
        assert_eq!(p.boundary_pieces.len(), 4);
    }

    #[test]
    fn edges_single_and_split() {
        let p = generate_flat(&Unit);
        let single = p.edges(EdgeMode::Single).unwrap();
        assert_eq!(single.len(), 1);
        assert!(single[0].closed);
        assert_eq!(single[0].points.len(), 4);
        assert_eq!(p.edges(EdgeMode::Split).unwrap().len(), 4);
    }

    #[test]
    fn assemble_appends_markers_and_edges() {
        let p = generate_flat(&Unit);
        let tree = p.assemble(0.5, EdgeMode::Single).unwrap();
        let PathTree::Group(groups) = &tree else {
            panic!("expected group");
        };
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[1].path_count(), 4);
        assert!(groups[1].paths().all(|m| m.radius == Some(0.5)));
        assert_eq!(groups[2].paths().next().unwrap().style, Style::Edge);
    }
}
