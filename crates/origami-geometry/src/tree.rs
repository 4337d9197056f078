use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::{GeometryError, Path, Point};

/// Nested grouping of paths. Groups carry no geometric meaning; they are preserved through
/// every transform so the renderer can reproduce the intended grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathTree {
    Leaf(Path),
    Group(Vec<PathTree>),
}

impl PathTree {
    #[must_use]
    pub fn empty() -> Self {
        PathTree::Group(Vec::new())
    }

    /// Leaves in depth-first order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> + '_ {
        let mut out = Vec::new();
        self.collect_paths(&mut out);
        out.into_iter()
    }

    fn collect_paths<'a>(&'a self, out: &mut Vec<&'a Path>) {
        match self {
            PathTree::Leaf(p) => out.push(p),
            PathTree::Group(children) => {
                for child in children {
                    child.collect_paths(out);
                }
            }
        }
    }

    #[must_use]
    pub fn path_count(&self) -> usize {
        match self {
            PathTree::Leaf(_) => 1,
            PathTree::Group(children) => children.iter().map(PathTree::path_count).sum(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path_count() == 0
    }

    /// Append `child` when `self` is a group; a leaf is first wrapped into one.
    pub fn push(&mut self, child: impl Into<PathTree>) {
        match self {
            PathTree::Group(children) => children.push(child.into()),
            PathTree::Leaf(_) => {
                let leaf = std::mem::replace(self, PathTree::empty());
                *self = PathTree::Group(vec![leaf, child.into()]);
            }
        }
    }
}

impl From<Path> for PathTree {
    fn from(p: Path) -> Self {
        PathTree::Leaf(p)
    }
}

impl From<Vec<Path>> for PathTree {
    fn from(paths: Vec<Path>) -> Self {
        PathTree::Group(paths.into_iter().map(PathTree::Leaf).collect())
    }
}

impl From<Vec<PathTree>> for PathTree {
    fn from(children: Vec<PathTree>) -> Self {
        PathTree::Group(children)
    }
}

impl FromIterator<Path> for PathTree {
    fn from_iter<I: IntoIterator<Item = Path>>(iter: I) -> Self {
        PathTree::Group(iter.into_iter().map(PathTree::Leaf).collect())
    }
}

/// Shape-preserving transforms over anything that holds paths: a single [`Path`], a flat
/// list, or a [`PathTree`].
pub trait PathMap: Sized {
    fn try_map_paths<E, F>(&self, f: &mut F) -> Result<Self, E>
    where
        F: FnMut(&Path) -> Result<Path, E>;

    fn map_paths<F>(&self, mut f: F) -> Self
    where
        F: FnMut(&Path) -> Path,
    {
        let mapped = self.try_map_paths(&mut |p| Ok::<_, Infallible>(f(p)));
        match mapped {
            Ok(v) => v,
            Err(never) => match never {},
        }
    }

    #[must_use]
    fn translated(&self, delta: impl Into<Point>) -> Self {
        let delta = delta.into();
        self.map_paths(|p| p.translate(delta))
    }

    #[must_use]
    fn scaled(&self, k: f64) -> Self {
        self.map_paths(|p| p.scale(k))
    }

    fn reflected(&self, p: impl Into<Point>, q: impl Into<Point>) -> Result<Self, GeometryError> {
        let (p, q) = (p.into(), q.into());
        self.try_map_paths(&mut |path| path.reflect(p, q))
    }

    #[must_use]
    fn inverted_all(&self) -> Self {
        self.map_paths(Path::inverted)
    }
}

impl PathMap for Path {
    fn try_map_paths<E, F>(&self, f: &mut F) -> Result<Self, E>
    where
        F: FnMut(&Path) -> Result<Path, E>,
    {
        f(self)
    }
}

impl PathMap for Vec<Path> {
    fn try_map_paths<E, F>(&self, f: &mut F) -> Result<Self, E>
    where
        F: FnMut(&Path) -> Result<Path, E>,
    {
        self.iter().map(f).collect()
    }
}

impl PathMap for PathTree {
    fn try_map_paths<E, F>(&self, f: &mut F) -> Result<Self, E>
    where
        F: FnMut(&Path) -> Result<Path, E>,
    {
        Ok(match self {
            PathTree::Leaf(p) => PathTree::Leaf(f(p)?),
            PathTree::Group(children) => PathTree::Group(
                children
                    .iter()
                    .map(|c| c.try_map_paths(&mut *f))
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Style;

    fn sample() -> PathTree {
        PathTree::Group(vec![
            Path::line((0.0, 0.0), (1.0, 0.0), Style::Mountain).into(),
            PathTree::Group(vec![
                Path::line((0.0, 1.0), (1.0, 1.0), Style::Valley).into(),
                PathTree::Group(vec![]),
            ]),
        ])
    }

    #[test]
    fn translated_preserves_shape() {
        let moved = sample().translated((2.0, 3.0));
        let PathTree::Group(top) = &moved else {
            panic!("expected group");
        };
        assert_eq!(top.len(), 2);
        let PathTree::Group(inner) = &top[1] else {
            panic!("expected nested group");
        };
        assert_eq!(inner.len(), 2);
        assert_eq!(inner[1], PathTree::Group(vec![]));
        assert_eq!(
            moved.paths().next().unwrap().points[0],
            Point::new(2.0, 3.0)
        );
    }

    #[test]
    fn reflected_propagates_degenerate_line() {
        assert!(sample().reflected((1.0, 1.0), (1.0, 1.0)).is_err());
        let mirrored = sample().reflected((0.0, 0.0), (1.0, 0.0)).unwrap();
        let ys: Vec<f64> = mirrored.paths().map(|p| p.points[0].y).collect();
        assert_eq!(ys, vec![0.0, -1.0]);
    }

    #[test]
    fn push_wraps_leaf() {
        let mut t: PathTree = Path::line((0.0, 0.0), (1.0, 0.0), Style::Cut).into();
        t.push(Path::line((0.0, 0.0), (0.0, 1.0), Style::Cut));
        assert_eq!(t.path_count(), 2);
        assert!(matches!(t, PathTree::Group(ref c) if c.len() == 2));
    }

    #[test]
    fn tree_serializes_as_nested_arrays() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.is_array());
        assert!(json[1].is_array());
        assert_eq!(json[0]["style"], "mountain");
    }
}
