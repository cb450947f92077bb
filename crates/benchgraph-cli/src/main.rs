//! benchgraph command-line interface.
//!
//! Renders benchmark comparison charts from a run directory of CSV
//! timing series. Exits non-zero with a diagnostic on any missing file,
//! malformed field, or rendering failure.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use benchgraph_cli::{run, Args};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(artifacts) => {
            for path in artifacts {
                println!("{}", path.display());
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
