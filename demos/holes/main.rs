//! Prints the voids enclosed by a set of thick lines.
//!
//! Usage:
//! ```text
//! cargo run --example holes                   # built-in frame sample
//! cargo run --example holes -- lines.json     # [{"start":[x,y],"end":[x,y],"thickness":t}, ...]
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use hollow::config::{load_segments, sample_segments};
use hollow::operations::boolean::GeoBooleanOps;
use hollow::pipeline::find_enclosed_holes;

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for hollow.
    // Override with RUST_LOG env var (e.g. RUST_LOG=hollow=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hollow=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "holes failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let segments = match std::env::args_os().nth(1) {
        Some(path) => load_segments(&PathBuf::from(path))?,
        None => sample_segments(),
    };
    let holes = find_enclosed_holes(&segments, &GeoBooleanOps)?;
    println!("Holes Output: {}", serde_json::to_string(&holes)?);
    Ok(())
}
