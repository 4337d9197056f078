use thiserror::Error;

use crate::Point;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("cannot reflect across a degenerate line through ({x}, {y})", x = .at.x, y = .at.y)]
    DegenerateLine { at: Point },

    #[error("{style} path needs {expected} point(s), found {found}")]
    PointCount {
        style: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("split needs 1 or {segments} style(s) for {segments} segment(s), found {found}")]
    StyleCount { segments: usize, found: usize },

    #[error("outline needs at least 3 points, found {found}")]
    OutlineTooShort { found: usize },

    #[error("outline has a zero-length edge at index {index} ({x}, {y})", x = .at.x, y = .at.y)]
    ZeroLengthEdge { index: usize, at: Point },

    #[error(
        "boundary piece {index} ends at ({}, {}) but the next piece starts at ({}, {})",
        .end.x, .end.y, .next_start.x, .next_start.y
    )]
    Discontinuity {
        index: usize,
        end: Point,
        next_start: Point,
    },
}
