//! Subtracts boxes from a larger box and prints the result as WKT and JSON.
//!
//! Usage:
//! ```text
//! cargo run --example box_difference                 # 10x10 minus two 2x2 boxes
//! cargo run --example box_difference -- boxes.json   # {"outer":{"min":[..],"max":[..]},"holes":[..]}
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use hollow::config::{load_box_difference, sample_box_difference};
use hollow::operations::boolean::GeoBooleanOps;
use hollow::pipeline::box_difference;

fn main() -> ExitCode {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("hollow=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "box difference failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let spec = match std::env::args_os().nth(1) {
        Some(path) => load_box_difference(&PathBuf::from(path))?,
        None => sample_box_difference(),
    };
    let result = box_difference(&spec, &GeoBooleanOps)?;
    println!("{result}");
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
