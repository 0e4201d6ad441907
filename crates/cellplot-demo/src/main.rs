#![forbid(unsafe_code)]

//! cellplot demo binary entry point.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use cellplot_demo::{app, cli};
use tracing_subscriber::EnvFilter;

/// Send tracing output to `path`; the terminal belongs to the plots.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() {
    let opts = cli::Opts::parse();

    if let Err(e) = init_logging(&opts.log_file) {
        eprintln!("Failed to open log file {}: {e}", opts.log_file.display());
        std::process::exit(1);
    }

    if let Err(e) = app::run(&opts) {
        tracing::error!(error = %e, "demo failed");
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}
