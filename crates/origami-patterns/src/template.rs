//! The simplest cylindrical pattern: parallelogram columns sheared by a constant angle.
//! Serves as a starting point for new cell generators.

use origami_geometry::primitives::hline;
use origami_geometry::{Path, PathTree, Point, Style};
use origami_layout::{clamp_param, Cell, CellGenerator, CylinderParams, Derived, LayoutError, ParamWarning};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateParams {
    pub radius: f64,
    /// Length of the slanted column fold.
    pub length: f64,
    /// Shear from vertical, in degrees.
    pub angle: f64,
    pub cylinder: CylinderParams,
}

impl Default for TemplateParams {
    fn default() -> Self {
        Self {
            radius: 10.0,
            length: 10.0,
            angle: 0.0,
            cylinder: CylinderParams::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub radius: f64,
    /// Displacement of each row's bottom-left corner from its top-left corner.
    pub step: Point,
}

impl Template {
    pub fn new(params: &TemplateParams, warnings: &mut Vec<ParamWarning>) -> Result<Self, LayoutError> {
        if !(params.length.is_finite() && params.length > 0.0) {
            return Err(LayoutError::invalid("length", params.length, "must be a positive number"));
        }
        let angle = clamp_param(
            "angle",
            params.angle,
            -89.0,
            89.0,
            "columns cannot lie flat",
            warnings,
        )
        .to_radians();
        Ok(Self {
            radius: params.radius,
            step: Point::new(params.length * angle.sin(), params.length * angle.cos()),
        })
    }
}

impl CellGenerator for Template {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn cell(&self, layout: &Derived) -> Result<Cell, LayoutError> {
        let w = layout.width;
        let Point { x: dx, y: dy } = self.step;

        let mut creases = Vec::with_capacity(layout.cols * 2);
        for i in 0..layout.cols {
            let x = i as f64 * w;
            creases.push(Path::line((x, 0.0), (x + w + dx, dy), Style::Valley));
            // The last column's fold is the right edge.
            if i + 1 < layout.cols {
                creases.push(Path::line((x + w + dx, dy), (x + w, 0.0), Style::Mountain));
            }
        }
        let interior = PathTree::from(creases);

        Ok(Cell {
            divider: Some(hline(0.0, w * layout.cols as f64, 0.0, Style::Mountain)),
            edge_left: Some(vec![Path::line((0.0, 0.0), self.step, Style::Edge); layout.rows]),
            edge_right: None,
            interior: vec![interior; layout.rows],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn angle_is_clamped_short_of_horizontal() {
        let params = TemplateParams {
            angle: 120.0,
            ..TemplateParams::default()
        };
        let mut warnings = Vec::new();
        let t = Template::new(&params, &mut warnings).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].clamped, 89.0);
        assert!(t.step.y > 0.0);
    }

    #[test]
    fn upright_columns() {
        let t = Template::new(&TemplateParams::default(), &mut Vec::new()).unwrap();
        assert_abs_diff_eq!(t.step.x, 0.0);
        assert_abs_diff_eq!(t.step.y, 10.0);
    }

    #[test]
    fn one_fold_pair_per_column_minus_the_edge() {
        let params = TemplateParams::default();
        let t = Template::new(&params, &mut Vec::new()).unwrap();
        let layout = Derived::new(&params.cylinder, t.radius, &mut Vec::new()).unwrap();
        let cell = t.cell(&layout).unwrap();
        assert_eq!(cell.interior.len(), layout.rows);
        assert_eq!(cell.interior[0].path_count(), 2 * layout.cols - 1);
    }

    #[test]
    fn zero_length_is_rejected() {
        let params = TemplateParams {
            length: 0.0,
            ..TemplateParams::default()
        };
        assert!(Template::new(&params, &mut Vec::new()).is_err());
    }
}
