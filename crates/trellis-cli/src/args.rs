//! Command-line arguments of the `trellis` binary.

use std::path::PathBuf;

use clap::Parser;

/// Render a Trellis scene description to SVG
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Scene file (TOML)
    pub input: PathBuf,

    /// SVG file to write [default: the input path with an `.svg` extension]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file; searched for when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Parse and render the scene without writing any output
    #[arg(long)]
    pub check: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Returns where the rendered SVG goes.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("svg"))
    }
}
