//! Commonly used types and functions for convenient importing.
//!
//! ```
//! use benchgraph::prelude::*;
//!
//! let speedup = relative_ratio(&[2.0_f64, 4.0], &[1.0, 2.0]).unwrap();
//! assert_eq!(speedup, vec![2.0, 2.0]);
//! ```

pub use crate::chart::{Chart, SeriesStyle};
pub use crate::error::{Error, Result};
pub use crate::metrics::{per_unit_cost, relative_ratio};
pub use crate::report::write_report;
pub use crate::scenario::{MachineContext, Scenario, TargetKind};
pub use crate::traits::SeriesElement;
