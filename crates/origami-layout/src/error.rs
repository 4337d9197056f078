use std::fmt;

use origami_geometry::GeometryError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("cell supplies neither edge_left nor edge_right")]
    UnderSpecifiedCell,

    #[error("cell field \"{field}\" has {found} row(s) but {expected} are needed")]
    RowCountMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("cell has no divider and its interior has no points on y = 0 to derive one")]
    MissingDivider,

    #[error("invalid parameter \"{name}\" = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: String,
    },

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl LayoutError {
    pub fn invalid(name: impl Into<String>, value: impl Into<f64>, reason: impl Into<String>) -> Self {
        LayoutError::InvalidParameter {
            name: name.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// A parameter that was outside its valid range and has been replaced by the nearest bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamWarning {
    pub parameter: String,
    pub requested: f64,
    pub clamped: f64,
    pub reason: String,
}

impl fmt::Display for ParamWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, using {} instead of {}",
            self.parameter, self.reason, self.clamped, self.requested
        )
    }
}

/// Clamp `value` into `[min, max]`, recording a warning when it moved.
pub fn clamp_param(
    parameter: &str,
    value: f64,
    min: f64,
    max: f64,
    reason: impl Into<String>,
    warnings: &mut Vec<ParamWarning>,
) -> f64 {
    let clamped = value.clamp(min, max);
    if clamped != value {
        let warning = ParamWarning {
            parameter: parameter.to_string(),
            requested: value,
            clamped,
            reason: reason.into(),
        };
        tracing::warn!("{warning}");
        warnings.push(warning);
    }
    clamped
}
