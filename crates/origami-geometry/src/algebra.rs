//! Batch operations over collections of paths: merging, flattening to vertices and
//! splitting polylines into per-segment strokes.

use indexmap::IndexSet;

use crate::{GeometryError, Path, PathTree, Point, PointKey, Style};

#[derive(PartialEq, Eq, Hash)]
struct PathKey {
    style: Style,
    points: Vec<PointKey>,
}

impl PathKey {
    fn of(path: &Path) -> Self {
        Self {
            style: path.style,
            points: path.points.iter().map(|p| p.key()).collect(),
        }
    }
}

/// Merge every path of `tree` into one flat list, keeping the first of any paths that share
/// both style and point sequence.
#[must_use]
pub fn simplify(tree: &PathTree) -> Vec<Path> {
    let mut seen = IndexSet::new();
    let mut out = Vec::new();
    for path in tree.paths() {
        if seen.insert(PathKey::of(path)) {
            out.push(path.clone());
        }
    }
    out
}

/// [`simplify`] over several batches at once.
#[must_use]
pub fn simplify_batches(batches: impl IntoIterator<Item = Vec<Path>>) -> Vec<Path> {
    simplify(&batches.into_iter().map(PathTree::from).collect::<Vec<_>>().into())
}

/// Every distinct point of `tree`, in first-seen order.
#[must_use]
pub fn flatten(tree: &PathTree) -> Vec<Point> {
    unique_points(tree.paths().flat_map(|p| p.points.iter().copied()))
}

/// Exact-equality deduplication in first-seen order.
#[must_use]
pub fn unique_points(points: impl IntoIterator<Item = Point>) -> Vec<Point> {
    let mut seen = IndexSet::new();
    points
        .into_iter()
        .filter(|p| seen.insert(p.key()))
        .collect()
}

/// One independent two-point path per segment of `points`.
///
/// `styles` holds either a single style applied to every segment or exactly one style per
/// segment. A closed sequence gains the segment from the last point back to the first.
pub fn split(points: &[Point], styles: &[Style], closed: bool) -> Result<Vec<Path>, GeometryError> {
    let mut segments = points.len().saturating_sub(1);
    if closed && points.len() > 2 {
        segments += 1;
    }
    let style_at = |i: usize| -> Result<Style, GeometryError> {
        match styles {
            [only] => Ok(*only),
            _ if styles.len() == segments => Ok(styles[i]),
            _ => Err(GeometryError::StyleCount {
                segments,
                found: styles.len(),
            }),
        }
    };

    (0..segments)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            Ok(Path::line(a, b, style_at(i)?))
        })
        .collect()
}
