//! Masu box: a flat square base folded into an open box. Not replicated.
//!
//! Creases are authored on a 4×4 unit square centred on the origin and expanded by the
//! box's diagonal symmetry before being scaled to `length`.

use origami_geometry::primitives::square;
use origami_geometry::{simplify_batches, GeometryError, Path, PathMap, PathTree, Point, Style};
use origami_layout::{FlatPattern, LayoutError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasuParams {
    pub length: f64,
    /// Annotate folds for a simulator (90° half folds) instead of a flat-folded sheet.
    pub sim: bool,
}

impl Default for MasuParams {
    fn default() -> Self {
        Self {
            length: 10.0,
            sim: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MasuBox {
    pub length: f64,
    pub valleys: Vec<Path>,
    pub mountains: Vec<Path>,
}

/// `path` plus its images across both diagonals.
fn diagonal_images(path: Path) -> Result<Vec<Path>, GeometryError> {
    let mut paths = vec![path];
    let across = paths.reflected((0.0, 0.0), (1.0, 1.0))?;
    paths.extend(across);
    let across = paths.reflected((0.0, 0.0), (1.0, -1.0))?;
    paths.extend(across);
    Ok(paths)
}

fn line(a: (f64, f64), b: (f64, f64), style: Style) -> Path {
    Path::line(a, b, style)
}

impl MasuBox {
    pub fn new(params: &MasuParams) -> Result<Self, LayoutError> {
        if !(params.length.is_finite() && params.length > 0.0) {
            return Err(LayoutError::invalid("length", params.length, "must be a positive number"));
        }
        let half = if params.sim { 90.0 } else { 180.0 };

        let corner_valleys = diagonal_images(Path::new(
            [(0.0, -1.0), (0.0, -2.0), (-0.5, -1.5)],
            Style::Valley,
        ))?;
        let short_valleys = vec![
            line((2.0, 1.0), (1.0, 2.0), Style::Valley).with_fold_angle(half),
            line((-2.0, -1.0), (-1.0, -2.0), Style::Valley).with_fold_angle(half),
        ];
        let long_valleys = vec![
            Path::new([(0.5, -1.5), (1.0, -2.0), (2.0, -1.0), (1.5, -0.5)], Style::Valley)
                .with_fold_angle(half),
            Path::new([(-0.5, 1.5), (-1.0, 2.0), (-2.0, 1.0), (-1.5, 0.5)], Style::Valley)
                .with_fold_angle(half),
        ];
        let valleys = simplify_batches([corner_valleys, long_valleys, short_valleys]);

        let center_square = vec![Path::new(
            [(-1.0, 0.0), (0.0, -1.0), (1.0, 0.0), (0.0, 1.0)],
            Style::Mountain,
        )
        .closed()
        .with_fold_angle(half)];
        let short_mountains =
            diagonal_images(line((0.0, -1.0), (0.5, -1.5), Style::Mountain).with_fold_angle(half))?;
        let horizontal_mountains = vec![
            line((-1.5, -0.5), (-0.5, -1.5), Style::Mountain),
            line((1.5, 0.5), (0.5, 1.5), Style::Mountain),
        ];
        let medium_mountains = diagonal_images(line((-1.0, -2.0), (0.0, -1.0), Style::Mountain))?;
        let long_mountains = vec![
            line((-2.0, 0.0), (0.0, 2.0), Style::Mountain),
            line((0.0, -2.0), (2.0, 0.0), Style::Mountain),
        ];
        let mountains = simplify_batches([
            center_square,
            short_mountains,
            horizontal_mountains,
            medium_mountains,
            long_mountains,
        ]);

        let centre = Point::new(params.length / 2.0, params.length / 2.0);
        let fit = |paths: Vec<Path>| paths.scaled(params.length / 4.0).translated(centre);
        Ok(Self {
            length: params.length,
            valleys: fit(valleys),
            mountains: fit(mountains),
        })
    }
}

impl FlatPattern for MasuBox {
    fn layout(&self) -> (Vec<Point>, PathTree) {
        let tree = PathTree::Group(vec![
            PathTree::from(self.valleys.clone()),
            PathTree::from(self.mountains.clone()),
        ]);
        (square(self.length), tree)
    }
}
