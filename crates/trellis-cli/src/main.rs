//! `trellis` binary.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error};

use trellis::TrellisError;
use trellis_cli::{Args, error_adapter::to_reportable};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);
    debug!(args:?; "Parsed arguments");

    if let Err(err) = trellis_cli::run(&args) {
        error!("{}", render_report(&err));
        process::exit(1);
    }
}

/// Installs `env_logger` at `level`, or at `warn` when `level` is not a
/// level name. `RUST_LOG` still refines per-module filters.
fn init_logger(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}

fn render_report(err: &TrellisError) -> String {
    let mut report = String::new();
    miette::GraphicalReportHandler::new()
        .render_report(&mut report, &to_reportable(err))
        .expect("Writing to String buffer is infallible");
    report
}
