//! Dataset loading for benchmark run directories.
//!
//! A run directory holds headerless comma-delimited files, each containing
//! one flat ordered sequence of numbers. Files may spread their values over
//! several lines; all fields are flattened in order. Every load re-reads
//! from storage; nothing is cached.
//!
//! Two element types occur in practice: `input_sizes.csv` holds positive
//! integers (the independent variable), and every timing file holds real
//! runtimes in seconds. Use [`read_input_sizes`] and [`read_timings`] for
//! those; [`read_series`] is the generic entry point.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;
use std::str::FromStr;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{Error, Result};

/// Reads a flat ordered sequence of numbers from a comma-delimited file.
///
/// `name` is resolved relative to `dir`. The `expected` string names the
/// requested element type in diagnostics ("integer" or "real").
///
/// # Errors
///
/// - [`Error::NotFound`] if the file does not exist.
/// - [`Error::Io`] for any other read failure.
/// - [`Error::DataFormat`] if a field cannot be parsed as `T`.
pub fn read_series<T: FromStr>(dir: &Path, name: &str, expected: &'static str) -> Result<Vec<T>> {
    let path = dir.join(name);
    let file = File::open(&path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            Error::NotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io {
                path: path.display().to_string(),
                source: e,
            }
        }
    })?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::DataFormat {
            path: path.display().to_string(),
            field: e.to_string(),
            expected,
        })?;
        for field in record.iter() {
            let trimmed = field.trim();
            if trimmed.is_empty() {
                continue;
            }
            let value = trimmed.parse::<T>().map_err(|_| Error::DataFormat {
                path: path.display().to_string(),
                field: trimmed.to_string(),
                expected,
            })?;
            values.push(value);
        }
    }

    debug!(path = %path.display(), count = values.len(), "loaded series");
    Ok(values)
}

/// Reads the shared independent variable: an ordered sequence of positive
/// integer dataset sizes.
///
/// Invariant (not enforced at load time, matching upstream producers):
/// the sequence is strictly increasing.
///
/// # Errors
///
/// See [`read_series`].
pub fn read_input_sizes(dir: &Path, name: &str) -> Result<Vec<u64>> {
    read_series::<u64>(dir, name, "integer")
}

/// Reads one timing series: measured runtimes in seconds, one value per
/// input size.
///
/// # Errors
///
/// See [`read_series`].
pub fn read_timings(dir: &Path, name: &str) -> Result<Vec<f64>> {
    read_series::<f64>(dir, name, "real")
}
