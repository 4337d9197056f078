//! Kresling tower: a twisted cylinder whose rows are triangulated by a valley/mountain
//! zigzag.

use std::f64::consts::PI;

use origami_geometry::primitives::hline;
use origami_geometry::{split, Path, PathMap, PathTree, Point, Style};
use origami_layout::{clamp_param, Cell, CellGenerator, CylinderParams, Derived, LayoutError, ParamWarning};
use serde::{Deserialize, Serialize};

/// Which physical length `measure_value` describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureType {
    /// Polygon side.
    A,
    /// Zigzag valley (the long diagonal).
    B,
    /// Zigzag mountain.
    L,
    #[default]
    RadiusExternal,
    RadiusInternal,
    DiameterExternal,
    DiameterInternal,
}

/// Which input determines the twist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterType {
    #[default]
    AngleRatio,
    RadialRatio,
    Lambdatheta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KreslingParams {
    pub measure_type: MeasureType,
    pub measure_value: f64,
    pub parameter_type: ParameterType,
    pub angle_ratio: f64,
    pub radial_ratio: f64,
    /// Degrees.
    pub lambdatheta: f64,
    /// Alternate the twist direction on every other row.
    pub mirrored: bool,
    pub cylinder: CylinderParams,
}

impl Default for KreslingParams {
    fn default() -> Self {
        Self {
            measure_type: MeasureType::RadiusExternal,
            measure_value: 10.0,
            parameter_type: ParameterType::AngleRatio,
            angle_ratio: 0.5,
            radial_ratio: 0.5,
            lambdatheta: 45.0,
            mirrored: false,
            cylinder: CylinderParams::default(),
        }
    }
}

/// A resolved Kresling tower, ready to produce cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Kresling {
    pub radius: f64,
    pub angle_ratio: f64,
    pub mirrored: bool,
}

/// Half the interior angle of the polygon.
fn theta(sides: f64) -> f64 {
    (PI / 2.0) * (1.0 - 2.0 / sides)
}

impl Kresling {
    pub fn new(params: &KreslingParams, warnings: &mut Vec<ParamWarning>) -> Result<Self, LayoutError> {
        let sides = params.cylinder.sides;
        if sides < 3 {
            return Err(LayoutError::invalid(
                "sides",
                sides,
                "a closed polygon needs at least 3 sides",
            ));
        }
        if !(params.measure_value.is_finite() && params.measure_value > 0.0) {
            return Err(LayoutError::invalid(
                "measure_value",
                params.measure_value,
                "must be a positive number",
            ));
        }

        let n = f64::from(sides);
        let angle_ratio = match params.parameter_type {
            ParameterType::AngleRatio => clamp_param(
                "angle_ratio",
                params.angle_ratio,
                0.0,
                1.0,
                "angle ratio must lie in [0, 1]",
                warnings,
            ),
            ParameterType::RadialRatio => {
                let max = ((PI / 4.0) * (1.0 - 2.0 / n)).sin();
                let ratio = clamp_param(
                    "radial_ratio",
                    params.radial_ratio,
                    0.0,
                    max,
                    format!("a polygon of {sides} sides allows a radial ratio up to {max}"),
                    warnings,
                );
                1.0 - 2.0 * n * ratio.asin() / ((n - 2.0) * PI)
            }
            ParameterType::Lambdatheta => {
                let min = 45.0 * (1.0 - 2.0 / n);
                let lambdatheta = clamp_param(
                    "lambdatheta",
                    params.lambdatheta,
                    min,
                    2.0 * min,
                    format!("a polygon of {sides} sides needs lambda*theta in [{min}, {}] degrees", 2.0 * min),
                    warnings,
                );
                lambdatheta * n / (90.0 * (n - 2.0))
            }
        };

        let radius = radius_from_measure(params.measure_type, params.measure_value, n, angle_ratio);
        if !(radius.is_finite() && radius > 0.0) {
            return Err(LayoutError::invalid(
                "measure_value",
                params.measure_value,
                "does not describe a tower with a positive radius",
            ));
        }
        if (theta(n) * angle_ratio).sin() <= 0.0 {
            return Err(LayoutError::invalid(
                "angle_ratio",
                angle_ratio,
                "rows collapse to zero height",
            ));
        }

        tracing::debug!(radius, angle_ratio, mirrored = params.mirrored, "kresling tower");
        Ok(Self {
            radius,
            angle_ratio,
            mirrored: params.mirrored,
        })
    }

    /// Row displacement `(dx, dy)` of the bottom-left corner for a column of `width`.
    #[must_use]
    pub fn row_step(&self, sides: usize, width: f64) -> Point {
        let theta = theta(sides as f64);
        let l = 2.0 * self.radius * (theta * (1.0 - self.angle_ratio)).cos();
        Point::new(
            l * (theta * self.angle_ratio).cos() - width,
            l * (theta * self.angle_ratio).sin(),
        )
    }

    /// Valley/mountain zigzag across `cols` columns, the last column without its closing
    /// mountain.
    pub fn zigzag(&self, layout: &Derived) -> Result<Vec<Path>, LayoutError> {
        let step = self.row_step(layout.sides, layout.width);
        let a = layout.width;
        let mut points = Vec::with_capacity(layout.cols * 2);
        let mut styles = Vec::with_capacity(layout.cols * 2);
        for i in 0..layout.cols {
            points.push(Point::new(i as f64 * a, 0.0));
            points.push(Point::new((i + 1) as f64 * a + step.x, step.y));
            styles.push(Style::Valley);
            if i + 1 != layout.cols {
                styles.push(Style::Mountain);
            }
        }
        split(&points, &styles, false).map_err(LayoutError::from)
    }
}

fn radius_from_measure(measure: MeasureType, value: f64, n: f64, angle_ratio: f64) -> f64 {
    let theta = theta(n);
    match measure {
        MeasureType::A => 0.5 * value / (PI / n).sin(),
        MeasureType::B => {
            let a = (theta * (1.0 - angle_ratio)).cos();
            let b = (PI / n).sin();
            let c = (theta * angle_ratio).cos();
            0.5 * value / (a * a + b * b - 2.0 * a * b * c).sqrt()
        }
        MeasureType::L => 0.5 * value / (theta * (1.0 - angle_ratio)).cos(),
        MeasureType::RadiusExternal => value,
        MeasureType::RadiusInternal => value / (theta * (1.0 - angle_ratio)).sin(),
        MeasureType::DiameterExternal => 0.5 * value,
        MeasureType::DiameterInternal => 0.5 * value / (theta * (1.0 - angle_ratio)).sin(),
    }
}

impl CellGenerator for Kresling {
    fn radius(&self) -> f64 {
        self.radius
    }

    fn cell(&self, layout: &Derived) -> Result<Cell, LayoutError> {
        let step = self.row_step(layout.sides, layout.width);
        let zigzag = self.zigzag(layout)?;

        let (edges, interiors) = if self.mirrored {
            let mid = step.y / 2.0;
            let flipped = zigzag
                .reflected((0.0, mid), (1.0, mid))?
                .translated((-step.x, 0.0));
            (
                vec![
                    Path::line((0.0, 0.0), step, Style::Edge),
                    Path::line((0.0, 0.0), (-step.x, step.y), Style::Edge),
                ],
                vec![PathTree::from(zigzag), PathTree::from(flipped)],
            )
        } else {
            (
                vec![Path::line((0.0, 0.0), step, Style::Edge)],
                vec![PathTree::from(zigzag)],
            )
        };

        let pick = |i: usize| i % edges.len();
        Ok(Cell {
            divider: Some(hline(0.0, layout.width * layout.cols as f64, 0.0, Style::Mountain)),
            edge_left: Some((0..layout.rows).map(|i| edges[pick(i)].clone()).collect()),
            edge_right: None,
            interior: (0..layout.rows).map(|i| interiors[pick(i)].clone()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(sides: u32) -> KreslingParams {
        let mut p = KreslingParams::default();
        p.cylinder.sides = sides;
        p
    }

    #[test]
    fn radius_measures_agree_on_a_polygon_side() {
        let mut p = params(6);
        p.measure_type = MeasureType::A;
        p.measure_value = 10.0;
        let k = Kresling::new(&p, &mut Vec::new()).unwrap();
        assert_relative_eq!(k.radius, 10.0, epsilon = 1e-9);

        p.measure_type = MeasureType::DiameterExternal;
        p.measure_value = 30.0;
        let k = Kresling::new(&p, &mut Vec::new()).unwrap();
        assert_eq!(k.radius, 15.0);
    }

    #[test]
    fn lambdatheta_is_clamped_to_the_polygon_range() {
        let mut p = params(6);
        p.parameter_type = ParameterType::Lambdatheta;
        p.lambdatheta = 10.0;
        let mut warnings = Vec::new();
        let k = Kresling::new(&p, &mut warnings).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].parameter, "lambdatheta");
        assert_relative_eq!(warnings[0].clamped, 30.0, epsilon = 1e-12);
        assert_relative_eq!(k.angle_ratio, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn radial_ratio_bounds_map_onto_angle_ratio() {
        let mut p = params(8);
        p.parameter_type = ParameterType::RadialRatio;
        p.radial_ratio = 0.99;
        let mut warnings = Vec::new();
        let k = Kresling::new(&p, &mut warnings).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_relative_eq!(k.angle_ratio, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn angle_ratio_above_one_is_clamped() {
        let mut p = params(6);
        p.angle_ratio = 1.5;
        let mut warnings = Vec::new();
        let k = Kresling::new(&p, &mut warnings).unwrap();
        assert_eq!(k.angle_ratio, 1.0);
        assert_eq!(warnings[0].requested, 1.5);
    }

    #[test]
    fn flat_rows_are_rejected() {
        let mut p = params(6);
        p.angle_ratio = 0.0;
        assert!(matches!(
            Kresling::new(&p, &mut Vec::new()),
            Err(LayoutError::InvalidParameter { ref name, .. }) if name == "angle_ratio"
        ));
    }

    #[test]
    fn zigzag_alternates_valley_and_mountain() {
        let p = params(6);
        let k = Kresling::new(&p, &mut Vec::new()).unwrap();
        let layout = Derived::new(&p.cylinder, k.radius, &mut Vec::new()).unwrap();
        let zigzag = k.zigzag(&layout).unwrap();
        assert_eq!(zigzag.len(), 2 * layout.cols - 1);
        assert_eq!(zigzag[0].style, Style::Valley);
        assert_eq!(zigzag[1].style, Style::Mountain);
        assert_eq!(zigzag.last().map(|p| p.style), Some(Style::Valley));
    }

    #[test]
    fn mirrored_rows_swing_back() {
        let mut p = params(6);
        p.mirrored = true;
        let k = Kresling::new(&p, &mut Vec::new()).unwrap();
        let layout = Derived::new(&p.cylinder, k.radius, &mut Vec::new()).unwrap();
        let cell = k.cell(&layout).unwrap();
        let edges = cell.edge_left.unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[0], edges[2]);
        assert_eq!(edges[0].displacement().x, -edges[1].displacement().x);

        // The flipped zigzag starts on the bottom edge, one step back.
        let step = k.row_step(layout.sides, layout.width);
        let flipped: Vec<_> = cell.interior[1].paths().collect();
        assert_eq!(flipped[0].points[0], Point::new(-step.x, step.y));
    }
}
