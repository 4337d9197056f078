//! Replication of a [`Cell`](crate::Cell) across rows and around the circumference.

use origami_geometry::{flatten, Path, PathTree, Point};
use serde::Serialize;

use crate::boundary::{stitch, Boundary};
use crate::cell::{CellGenerator, ResolvedCell};
use crate::error::LayoutError;
use crate::params::{CylinderParams, Derived};
use crate::pattern::Pattern;
use crate::slots::band_slots;

/// Where each row sits on the sheet, base and middle bands included. Without bands,
/// `origins[i]` is the running sum of the left-edge displacements of rows before `i`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowPlacement {
    /// Top-left corner of row `i`.
    pub origins: Vec<Point>,
    /// Bottom-left corner of row `i`: the end of its placed left edge.
    pub bottoms: Vec<Point>,
}

impl RowPlacement {
    /// Accumulate row origins: the first row starts below the base band, each following row
    /// starts one middle band below the bottom of the previous one.
    #[must_use]
    pub fn new(layout: &Derived, cell: &ResolvedCell) -> Self {
        let step = Point::new(0.0, layout.distance());
        let mut origins = Vec::with_capacity(layout.rows);
        let mut bottoms = Vec::with_capacity(layout.rows);
        let mut origin = Point::new(0.0, layout.base_height());
        for edge in cell.edge_left.iter().take(layout.rows) {
            let bottom = origin + edge.displacement();
            origins.push(origin);
            bottoms.push(bottom);
            origin = bottom + step;
        }
        Self { origins, bottoms }
    }
}

/// Everything the engine produced before assembly into a [`Pattern`].
#[derive(Debug, Clone)]
pub struct Layout {
    pub dividers: Vec<Path>,
    pub interiors: Vec<PathTree>,
    pub base_slots: Vec<Vec<Path>>,
    pub middle_slots: Vec<Vec<Path>>,
    pub boundary: Boundary,
    pub rows: RowPlacement,
    pub cell: ResolvedCell,
}

/// Horizontal mountain lines between rows: at the inner edge of each base band and on both
/// sides of every middle band.
#[must_use]
pub fn horizontal_dividers(layout: &Derived, cell: &ResolvedCell, rows: &RowPlacement) -> Vec<Path> {
    let mut dividers = Vec::new();
    if layout.base.is_some() {
        dividers.push(cell.divider.translate(rows.origins[0]));
    }
    for i in 1..layout.rows {
        dividers.push(cell.divider.translate(rows.bottoms[i - 1]));
        if layout.middle.is_some() {
            dividers.push(cell.divider.translate(rows.origins[i]));
        }
    }
    if layout.base.is_some() {
        dividers.push(cell.divider.translate(rows.bottoms[layout.rows - 1]));
    }
    dividers
}

#[must_use]
pub fn interiors(layout: &Derived, cell: &ResolvedCell, rows: &RowPlacement) -> Vec<PathTree> {
    (0..layout.rows)
        .map(|i| cell.interior_at(i, rows.origins[i]))
        .collect()
}

/// The base band's slot line at the very top, and its vertical mirror below the last row.
#[must_use]
pub fn base_slots(layout: &Derived, rows: &RowPlacement) -> Vec<Vec<Path>> {
    let Some(band) = &layout.base else {
        return Vec::new();
    };
    let top = band_slots(band, layout.cols, layout.width, false);
    let bottom = band_slots(band, layout.cols, layout.width, true);
    let last = rows.bottoms[layout.rows - 1];
    vec![top, bottom.into_iter().map(|p| p.translate(last)).collect()]
}

/// One middle-band slot line at each internal row boundary.
#[must_use]
pub fn middle_slots(layout: &Derived, rows: &RowPlacement) -> Vec<Vec<Path>> {
    let Some(band) = &layout.middle else {
        return Vec::new();
    };
    let line = band_slots(band, layout.cols, layout.width, false);
    (1..layout.rows)
        .map(|i| line.iter().map(|p| p.translate(rows.bottoms[i - 1])).collect())
        .collect()
}

/// Run every layout step for `generator` without assembling the result.
pub fn place<G: CellGenerator + ?Sized>(generator: &G, layout: &Derived) -> Result<Layout, LayoutError> {
    if layout.rows == 0 {
        return Err(LayoutError::invalid("rows", 0.0, "at least one row is needed"));
    }
    if layout.cols == 0 {
        return Err(LayoutError::invalid("cols", 0.0, "at least one column is needed"));
    }
    let cell = generator.cell(layout)?.resolve(layout.rows)?;
    let rows = RowPlacement::new(layout, &cell);
    tracing::debug!(
        rows = layout.rows,
        cols = layout.cols,
        width = layout.width,
        cell_width = cell.width,
        "placing cell"
    );

    Ok(Layout {
        dividers: horizontal_dividers(layout, &cell, &rows),
        interiors: interiors(layout, &cell, &rows),
        base_slots: base_slots(layout, &rows),
        middle_slots: middle_slots(layout, &rows),
        boundary: stitch(layout, &cell, &rows),
        rows,
        cell,
    })
}

/// Generate the full cylindrical pattern for `generator` under `params`.
pub fn generate<G: CellGenerator + ?Sized>(
    generator: &G,
    params: &CylinderParams,
) -> Result<Pattern, LayoutError> {
    let mut warnings = Vec::new();
    let derived = Derived::new(params, generator.radius(), &mut warnings)?;
    let out = place(generator, &derived)?;

    let outline = out.boundary.outline();
    let vertices = match generator.vertices(&derived) {
        Some(v) => v,
        None => {
            let mut creases: Vec<PathTree> = vec![
                PathTree::from(out.dividers.clone()),
                PathTree::Group(out.interiors.clone()),
            ];
            creases.extend(out.boundary.pieces.iter().cloned().map(PathTree::Leaf));
            flatten(&PathTree::Group(creases))
        }
    };

    let slots = PathTree::Group(vec![
        PathTree::Group(out.base_slots.into_iter().map(PathTree::from).collect()),
        PathTree::Group(out.middle_slots.into_iter().map(PathTree::from).collect()),
    ]);
    let tree = PathTree::Group(vec![
        PathTree::from(out.dividers),
        PathTree::Group(out.interiors),
        slots,
    ]);

    Ok(Pattern {
        tree,
        boundary: outline,
        boundary_pieces: out.boundary.pieces,
        vertices,
        warnings,
    })
}
