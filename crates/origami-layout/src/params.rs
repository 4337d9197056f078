//! Caller-supplied replication parameters and the values derived from them once per run.

use origami_geometry::primitives::polygon_side;
use serde::{Deserialize, Serialize};

use crate::error::{clamp_param, LayoutError, ParamWarning};

/// Vertical placement of a slot inside its band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotPosition {
    /// Sign +1: flush against the band's far edge (the bottom, in y-down coordinates).
    Top,
    #[default]
    Center,
    /// Sign -1: flush against the band's origin edge.
    Bottom,
}

impl SlotPosition {
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            SlotPosition::Top => 1,
            SlotPosition::Center => 0,
            SlotPosition::Bottom => -1,
        }
    }

    /// The position seen from the other side of the band.
    #[must_use]
    pub fn mirrored(self) -> Self {
        match self {
            SlotPosition::Top => SlotPosition::Bottom,
            SlotPosition::Center => SlotPosition::Center,
            SlotPosition::Bottom => SlotPosition::Top,
        }
    }

    /// Offset of a slot of `slot_height` from the origin edge of a band of `band_height`.
    #[must_use]
    pub fn offset(self, band_height: f64, slot_height: f64) -> f64 {
        match self {
            SlotPosition::Bottom => 0.0,
            SlotPosition::Center => (band_height - slot_height) / 2.0,
            SlotPosition::Top => band_height - slot_height,
        }
    }
}

/// One optional slot band: the base band (top and bottom of the pattern) or the middle band
/// (between every pair of rows). `height` is the band's vertical extent; for the middle band
/// it is the distance between rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandParams {
    pub enabled: bool,
    pub height: f64,
    pub slot_height: f64,
    pub slot_width: f64,
    pub position: SlotPosition,
}

impl BandParams {
    #[must_use]
    pub fn base() -> Self {
        Self {
            enabled: false,
            height: 5.0,
            slot_height: 3.0,
            slot_width: 3.0,
            position: SlotPosition::Top,
        }
    }

    #[must_use]
    pub fn middle() -> Self {
        Self {
            enabled: false,
            height: 3.0,
            slot_height: 3.0,
            slot_width: 3.0,
            position: SlotPosition::Center,
        }
    }
}

impl Default for BandParams {
    fn default() -> Self {
        Self::middle()
    }
}

fn default_base() -> BandParams {
    BandParams::base()
}

/// Replication parameters shared by every cylindrical pattern. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderParams {
    pub sides: u32,
    pub rows: u32,
    /// Add one attachment column after the last side.
    pub extra_column: bool,
    #[serde(default = "default_base")]
    pub base: BandParams,
    pub middle: BandParams,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            sides: 6,
            rows: 3,
            extra_column: false,
            base: BandParams::base(),
            middle: BandParams::middle(),
        }
    }
}

/// A band that survived validation, with slot sizes clamped to the band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub height: f64,
    pub slot_height: f64,
    pub slot_width: f64,
    pub position: SlotPosition,
}

/// Values computed once from [`CylinderParams`] and threaded through every layout step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Derived {
    pub radius: f64,
    pub sides: usize,
    pub rows: usize,
    /// `sides`, plus one when an attachment column is requested.
    pub cols: usize,
    /// Length of one polygon side, i.e. the width of one column.
    pub width: f64,
    pub base: Option<Band>,
    pub middle: Option<Band>,
}

impl Derived {
    pub fn new(
        params: &CylinderParams,
        radius: f64,
        warnings: &mut Vec<ParamWarning>,
    ) -> Result<Self, LayoutError> {
        if params.sides < 3 {
            return Err(LayoutError::invalid(
                "sides",
                params.sides,
                "a closed polygon needs at least 3 sides",
            ));
        }
        if params.rows < 1 {
            return Err(LayoutError::invalid("rows", params.rows, "at least one row is needed"));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(LayoutError::invalid("radius", radius, "must be a positive number"));
        }

        let width = polygon_side(radius, params.sides);
        let base = resolve_band("base", &params.base, width, warnings)?;
        let middle = resolve_band("middle", &params.middle, width, warnings)?;

        Ok(Self {
            radius,
            sides: params.sides as usize,
            rows: params.rows as usize,
            cols: params.sides as usize + usize::from(params.extra_column),
            width,
            base,
            middle,
        })
    }

    #[must_use]
    pub fn base_height(&self) -> f64 {
        self.base.map_or(0.0, |b| b.height)
    }

    /// Distance between consecutive rows.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.middle.map_or(0.0, |b| b.height)
    }
}

fn resolve_band(
    name: &'static str,
    band: &BandParams,
    width: f64,
    warnings: &mut Vec<ParamWarning>,
) -> Result<Option<Band>, LayoutError> {
    for (field, value) in [
        ("height", band.height),
        ("slot_height", band.slot_height),
        ("slot_width", band.slot_width),
    ] {
        if !(value.is_finite() && value >= 0.0) {
            return Err(LayoutError::invalid(
                format!("{name}.{field}"),
                value,
                "must be zero or a positive number",
            ));
        }
    }

    if !band.enabled {
        return Ok(None);
    }
    if band.height == 0.0 {
        tracing::debug!("{name} band has zero height, disabling it");
        return Ok(None);
    }

    let slot_height = clamp_param(
        &format!("{name}.slot_height"),
        band.slot_height,
        0.0,
        band.height,
        "slot cannot be taller than its band",
        warnings,
    );
    let slot_width = clamp_param(
        &format!("{name}.slot_width"),
        band.slot_width,
        0.0,
        width,
        "slot cannot be wider than one column",
        warnings,
    );

    Ok(Some(Band {
        height: band.height,
        slot_height,
        slot_width,
        position: band.position,
    }))
}
