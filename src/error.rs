use std::io;
use std::path::PathBuf;

use origami_geometry::GeometryError;
use origami_layout::LayoutError;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Bad command line (missing argument, unknown flag).
    Usage = 1,
    /// Unreadable or unparsable pattern file.
    Input = 2,
    /// Generation failed or the output could not be written.
    Processing = 3,
}

/// The pattern file could not be turned into a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// The generated pattern could not be written out.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("could not encode pattern: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("could not write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    pub code: ErrorCode,
    pub message: String,
}

impl CliError {
    fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Usage, message)
    }

    #[must_use]
    pub fn exit_code(&self) -> u8 {
        self.code as u8
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::new(ErrorCode::Input, e.to_string())
    }
}

impl From<LayoutError> for CliError {
    fn from(e: LayoutError) -> Self {
        Self::new(ErrorCode::Processing, format!("could not generate pattern: {e}"))
    }
}

impl From<GeometryError> for CliError {
    fn from(e: GeometryError) -> Self {
        Self::new(ErrorCode::Processing, format!("could not assemble pattern: {e}"))
    }
}

impl From<OutputError> for CliError {
    fn from(e: OutputError) -> Self {
        Self::new(ErrorCode::Processing, e.to_string())
    }
}
