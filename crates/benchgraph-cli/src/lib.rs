//! benchgraph CLI library.
//!
//! Exposes the argument definitions and the run pipeline for testing
//! and reuse by the binary.

pub mod args;
pub mod error;

pub use args::Args;
pub use error::{CliError, Result};

use std::path::PathBuf;

use benchgraph::prelude::*;
use tracing::info;

/// Executes one full run: load the scenario, derive metrics, and render
/// every chart. Returns the artifact paths in the order written.
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] if the run directory does not
/// exist, or [`CliError::Pipeline`] for any loading, derivation, or
/// rendering failure. There is no partial-output recovery.
pub fn run(args: &Args) -> Result<Vec<PathBuf>> {
    if !args.run_dir.is_dir() {
        return Err(CliError::InvalidArgument {
            argument: "run_dir".to_string(),
            reason: format!(
                "'{}' is not an existing directory",
                args.run_dir.display()
            ),
        });
    }

    info!(
        run_dir = %args.run_dir.display(),
        title = %args.title,
        include_specialized = !args.no_specialized,
        "starting benchmark run"
    );

    let scenario = Scenario::load(&args.run_dir, !args.no_specialized)?;
    let artifacts = write_report(&scenario, &args.run_dir, &args.title)?;
    Ok(artifacts)
}
