//! Typed 2D polylines for crease patterns and the algebra used to replicate them.

pub mod algebra;
pub mod error;
pub mod outline;
pub mod path;
pub mod point;
pub mod primitives;
pub mod tree;

pub use algebra::{flatten, simplify, simplify_batches, split, unique_points};
pub use error::GeometryError;
pub use path::{Path, Style};
pub use point::{Point, PointKey};
pub use tree::{PathMap, PathTree};
