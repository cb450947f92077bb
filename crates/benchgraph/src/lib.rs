//! benchgraph: benchmark timing-series comparison charts
//!
//! This crate turns per-configuration benchmark timing series (several
//! execution targets measured on two machines) into a set of labeled
//! comparison line charts for inclusion in a report.
//!
//! # Pipeline
//!
//! Data flows strictly left to right, single-threaded:
//!
//! 1. [`scenario`] loads the run's CSV series from a directory
//!    ([`scenario::Scenario::load`]).
//! 2. [`metrics`] derives comparison metrics: relative-speed ratios
//!    against a baseline and per-element cost.
//! 3. [`report`] composes one chart per metric family and renders each
//!    as an SVG artifact back into the run directory
//!    ([`report::write_report`]).
//!
//! # Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use benchgraph::prelude::*;
//!
//! # fn main() -> benchgraph::error::Result<()> {
//! let dir = Path::new("runs/sort");
//! let scenario = Scenario::load(dir, true)?;
//! let artifacts = write_report(&scenario, dir, "sort")?;
//! assert_eq!(artifacts.len(), scenario.chart_count());
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! There is no local recovery: every loading, derivation, or rendering
//! failure aborts the run with an [`error::Error`] identifying the
//! offending file or computation. A run either writes its full set of
//! charts or leaves no guaranteed-consistent artifacts behind.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::perf)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

pub mod chart;
pub mod error;
pub mod metrics;
pub mod prelude;
pub mod report;
pub mod scenario;
pub mod series;
pub mod traits;
pub mod utils;

pub use error::{Error, Result};
