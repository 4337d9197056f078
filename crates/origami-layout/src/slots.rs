//! Assembly slots: a row of rectangular cut-outs, one per column, separated by mountain tabs.

use origami_geometry::primitives::{rectangle, repeat};
use origami_geometry::{Path, Style};

use crate::params::{Band, SlotPosition};

/// `count` slot cut-outs across a band of `band_height`, one per column of `column_width`,
/// followed by the `count - 1` vertical dividers between columns. Slot sizes are capped to
/// the band. A slot with zero height and zero width produces nothing.
#[must_use]
pub fn slot_line(
    count: usize,
    position: SlotPosition,
    slot_height: f64,
    slot_width: f64,
    band_height: f64,
    column_width: f64,
) -> Vec<Path> {
    if slot_height == 0.0 && slot_width == 0.0 {
        return Vec::new();
    }
    let slot_height = slot_height.min(band_height);
    let slot_width = slot_width.min(column_width);

    let dx = (column_width - slot_width) / 2.0;
    let dy = position.offset(band_height, slot_height);
    let slot = Path::new(rectangle((dx, dy), slot_width, slot_height), Style::Cut).closed();
    let divider = Path::line((column_width, 0.0), (column_width, band_height), Style::Mountain);

    let pitch = (column_width, 0.0);
    let mut line = repeat(&slot, pitch, count);
    line.extend(repeat(&divider, pitch, count.saturating_sub(1)));
    line
}

/// [`slot_line`] for a resolved band, evaluated from the band's origin edge (`mirrored =
/// false`) or from the opposite edge.
#[must_use]
pub fn band_slots(band: &Band, count: usize, column_width: f64, mirrored: bool) -> Vec<Path> {
    let position = if mirrored {
        band.position.mirrored()
    } else {
        band.position
    };
    slot_line(
        count,
        position,
        band.slot_height,
        band.slot_width,
        band.height,
        column_width,
    )
}
