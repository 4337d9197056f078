use std::path::{Path, PathBuf};

use origami_geometry::{PathTree, Point};
use origami_layout::{EdgeMode, ParamWarning};
use origami_patterns::PatternConfig;
use serde::Serialize;

use crate::error::{CliError, ConfigError, OutputError};

pub struct RenderOptions {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub vertex_radius: f64,
    pub edges: EdgeMode,
}

#[derive(Serialize)]
struct Rendered<'a> {
    pattern: &'static str,
    boundary: &'a [Point],
    vertices: &'a [Point],
    warnings: &'a [ParamWarning],
    tree: PathTree,
}

pub fn load_config(path: &Path) -> Result<PatternConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn run_render(opts: &RenderOptions) -> Result<(), CliError> {
    let config = load_config(&opts.input)?;
    tracing::debug!(pattern = config.name(), input = %opts.input.display(), "loaded config");

    let pattern = config.generate()?;
    if let Err(e) = pattern.check_boundary() {
        tracing::warn!("outline of {} is not closed: {e}", config.name());
    }

    let rendered = Rendered {
        pattern: config.name(),
        boundary: &pattern.boundary,
        vertices: &pattern.vertices,
        warnings: &pattern.warnings,
        tree: pattern.assemble(opts.vertex_radius, opts.edges)?,
    };
    let json = serde_json::to_string_pretty(&rendered).map_err(OutputError::from)?;

    match &opts.output {
        Some(path) => std::fs::write(path, json + "\n").map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?,
        None => println!("{json}"),
    }
    Ok(())
}
