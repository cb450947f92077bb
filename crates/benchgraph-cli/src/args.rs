//! CLI argument parsing.
//!
//! The CLI follows the pattern: `benchgraph <run_dir> <title>
//! [--no-specialized]`. The run directory supplies every CSV input and
//! receives the rendered chart artifacts; the title is prefixed to every
//! chart caption; the flag excludes the optional specialized-comparison
//! series from both loading and rendering.

use std::path::PathBuf;

use clap::Parser;

/// benchgraph: render benchmark comparison charts from CSV timing series.
#[derive(Parser, Debug, Clone)]
#[command(name = "benchgraph")]
#[command(version, about = "Render benchmark comparison charts from CSV timing series")]
#[command(long_about = "Reads per-target timing series from a benchmark run directory, \
    derives relative-speed and per-element metrics, and writes one SVG line \
    chart per metric family back into the run directory.")]
pub struct Args {
    /// Run directory containing the CSV inputs; chart artifacts are
    /// written back into it
    pub run_dir: PathBuf,

    /// Free-text task description prefixed to every chart title
    pub title: String,

    /// Skip the optional bespoke native-extension comparison series
    /// (its CSV files are not read and no specialized chart is produced)
    #[arg(long)]
    pub no_specialized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_invocation() {
        let args = Args::try_parse_from(["benchgraph", "runs/sort", "sort"]).unwrap();
        assert_eq!(args.run_dir, PathBuf::from("runs/sort"));
        assert_eq!(args.title, "sort");
        assert!(!args.no_specialized);
    }

    #[test]
    fn test_parse_with_mode_flag() {
        let args =
            Args::try_parse_from(["benchgraph", "runs/sort", "sort", "--no-specialized"]).unwrap();
        assert!(args.no_specialized);
    }

    #[test]
    fn test_missing_title_is_rejected() {
        assert!(Args::try_parse_from(["benchgraph", "runs/sort"]).is_err());
    }

    #[test]
    fn test_missing_run_dir_is_rejected() {
        assert!(Args::try_parse_from(["benchgraph"]).is_err());
    }
}
