//! Replication engine for cylindrical fold patterns: places a pattern's cell across rows
//! and columns, adds assembly slot bands and stitches one closed outline.

pub mod boundary;
pub mod cell;
pub mod engine;
pub mod error;
pub mod params;
pub mod pattern;
pub mod slots;

pub use boundary::Boundary;
pub use cell::{Cell, CellGenerator, ResolvedCell};
pub use engine::{generate, place, Layout, RowPlacement};
pub use error::{clamp_param, LayoutError, ParamWarning};
pub use params::{Band, BandParams, CylinderParams, Derived, SlotPosition};
pub use pattern::{generate_flat, EdgeMode, FlatPattern, Pattern};
pub use slots::slot_line;
