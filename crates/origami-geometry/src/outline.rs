//! Closed-outline assembly and the continuity checks used to catch generator regressions.

use crate::{GeometryError, Path, Point};

/// Concatenate `pieces` into one closed point loop.
///
/// The first point of a piece is dropped when it equals the previous point, and the final
/// point is dropped when it returns to the start. Gaps are kept as-is; use
/// [`check_continuity`] to detect them.
#[must_use]
pub fn join(pieces: &[Path]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::new();
    for p in pieces.iter().flat_map(|piece| piece.points.iter().copied()) {
        if out.last() != Some(&p) {
            out.push(p);
        }
    }
    if out.len() > 1 && out.first() == out.last() {
        out.pop();
    }
    out
}

/// Every piece must end exactly where the next one starts, the last wrapping to the first.
pub fn check_continuity(pieces: &[Path]) -> Result<(), GeometryError> {
    for (index, piece) in pieces.iter().enumerate() {
        let next = &pieces[(index + 1) % pieces.len()];
        let (Some(end), Some(next_start)) = (piece.last(), next.first()) else {
            continue;
        };
        if end != next_start {
            return Err(GeometryError::Discontinuity {
                index,
                end,
                next_start,
            });
        }
    }
    Ok(())
}

/// A closed outline needs three or more points and no zero-length edge, including the
/// implicit edge from the last point back to the first.
pub fn check_closed(outline: &[Point]) -> Result<(), GeometryError> {
    if outline.len() < 3 {
        return Err(GeometryError::OutlineTooShort {
            found: outline.len(),
        });
    }
    for (index, &p) in outline.iter().enumerate() {
        if p == outline[(index + 1) % outline.len()] {
            return Err(GeometryError::ZeroLengthEdge { index, at: p });
        }
    }
    Ok(())
}
