//! Library side of the `trellis` binary.
//!
//! [`run`] loads the configuration, renders the input scene and writes the
//! SVG next to it unless told otherwise. The binary only adds logger setup
//! and error reporting on top.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, path::Path};

use log::{debug, info};

use trellis::{SceneBuilder, TrellisError, config::AppConfig};

/// Renders the scene named by `args` and writes the result.
///
/// With [`Args::check`] set the scene is still parsed and rendered, so every
/// error a real run would hit is reported, but nothing is written.
///
/// # Errors
///
/// Returns [`TrellisError::Io`] when the input cannot be read or the output
/// cannot be written, [`TrellisError::Config`] for a bad configuration file,
/// and [`TrellisError::Parse`] for an invalid scene.
pub fn run(args: &Args) -> Result<(), TrellisError> {
    let config = config::load_config(args.config.as_deref())?;
    let svg = render_file(&args.input, config)?;

    if args.check {
        info!(input = args.input.display().to_string(); "Scene is valid");
        return Ok(());
    }

    let output = args.output_path();
    fs::write(&output, &svg)?;
    info!(
        output = output.display().to_string(),
        bytes = svg.len();
        "SVG written"
    );

    Ok(())
}

/// Reads the scene at `input` and renders it with `config`.
///
/// # Errors
///
/// Returns [`TrellisError::Io`] when the file cannot be read, and whatever
/// [`SceneBuilder`] reports for parsing and rendering.
pub fn render_file(input: &Path, config: AppConfig) -> Result<String, TrellisError> {
    debug!(input = input.display().to_string(); "Reading scene");
    let source = fs::read_to_string(input)?;

    let builder = SceneBuilder::new(config);
    let scene = builder.parse(&source)?;
    builder.render_svg(&scene)
}
