//! Error types for benchgraph.
//!
//! This module defines the error types used throughout the benchgraph library
//! for handling failures in dataset loading, metric derivation, and chart
//! rendering. There is no local recovery anywhere in the pipeline: every
//! error aborts the run and carries enough context to identify the offending
//! file or computation.

use std::io;

use thiserror::Error;

/// The main error type for benchgraph operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An expected input file is absent from the run directory.
    #[error("input file not found: '{path}'")]
    NotFound {
        /// Path of the missing file.
        path: String,
    },

    /// An I/O error other than a missing file occurred while reading input.
    #[error("I/O error reading '{path}'")]
    Io {
        /// Path of the file that failed.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A field in an input file could not be parsed as the declared
    /// numeric type.
    #[error("malformed field '{field}' in '{path}': expected {expected}")]
    DataFormat {
        /// Path of the file containing the bad field.
        path: String,
        /// The unparseable field text.
        field: String,
        /// The numeric type that was requested ("integer" or "real").
        expected: &'static str,
    },

    /// Two series that must be zipped element-wise have different lengths.
    #[error("series length mismatch in {context}: {left} vs {right}")]
    ShapeMismatch {
        /// Description of the computation that required equal lengths.
        context: String,
        /// Length of the left-hand series.
        left: usize,
        /// Length of the right-hand series.
        right: usize,
    },

    /// Failed to convert a numeric value to the series element type.
    #[error("numeric conversion failed: {context}")]
    NumericConversion {
        /// Description of the conversion that failed.
        context: &'static str,
    },

    /// A chart artifact could not be rendered or written.
    #[error("cannot write chart artifact '{path}': {message}")]
    Write {
        /// Path of the artifact that failed.
        path: String,
        /// Description of the underlying rendering or I/O failure.
        message: String,
    },
}

/// Convenience type alias for Results using the benchgraph [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = Error::NotFound {
            path: "run/laptop/cpu.csv".to_string(),
        };
        assert_eq!(err.to_string(), "input file not found: 'run/laptop/cpu.csv'");
    }

    #[test]
    fn test_data_format_display() {
        let err = Error::DataFormat {
            path: "run/input_sizes.csv".to_string(),
            field: "12.5".to_string(),
            expected: "integer",
        };
        assert_eq!(
            err.to_string(),
            "malformed field '12.5' in 'run/input_sizes.csv': expected integer"
        );
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = Error::ShapeMismatch {
            context: "relative ratio".to_string(),
            left: 5,
            right: 3,
        };
        assert_eq!(
            err.to_string(),
            "series length mismatch in relative ratio: 5 vs 3"
        );
    }

    #[test]
    fn test_io_error_source_chain() {
        use std::error::Error as _;

        let err = Error::Io {
            path: "run/pc/gpu.csv".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_write_display_names_artifact() {
        let err = Error::Write {
            path: "run/runtimes.svg".to_string(),
            message: "disk full".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("runtimes.svg"));
        assert!(display.contains("disk full"));
    }
}
