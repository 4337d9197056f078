use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use origami_layout::EdgeMode;
use tracing_subscriber::EnvFilter;

mod error;
mod render;

use error::CliError;
use render::{run_render, RenderOptions};

#[derive(Parser)]
#[command(version, about = "Generate origami crease patterns", long_about = None)]
struct Cli {
    /// Pattern file (YAML or JSON)
    #[arg(value_name = "CONFIG")]
    input: PathBuf,

    /// Write the pattern here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Radius of the vertex markers
    #[arg(long, value_name = "R", default_value_t = 0.1)]
    vertex_radius: f64,

    /// Emit one edge path per outline segment
    #[arg(long)]
    separate_edges: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), CliError> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => return Err(CliError::usage(e.to_string())),
    };
    init_logging(cli.debug);

    run_render(&RenderOptions {
        input: cli.input,
        output: cli.output,
        vertex_radius: cli.vertex_radius,
        edges: if cli.separate_edges {
            EdgeMode::Split
        } else {
            EdgeMode::Single
        },
    })
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
