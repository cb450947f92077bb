//! CLI error types.
//!
//! Wraps pipeline errors from the benchgraph library and adds argument
//! validation failures. Messages are written to be actionable: what went
//! wrong, and where applicable, how to fix it.

use std::fmt;

/// CLI error type encompassing all failure conditions of a run.
#[derive(Debug)]
pub enum CliError {
    /// The loading/derivation/rendering pipeline failed.
    Pipeline {
        /// The underlying benchgraph error.
        source: benchgraph::Error,
    },
    /// An invalid argument was provided.
    InvalidArgument {
        /// Name of the invalid argument.
        argument: String,
        /// Description of why it is invalid.
        reason: String,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Pipeline { source } => {
                write!(f, "{source}")
            }
            CliError::InvalidArgument { argument, reason } => {
                write!(f, "Invalid argument '{argument}': {reason}")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Pipeline { source } => Some(source),
            CliError::InvalidArgument { .. } => None,
        }
    }
}

impl From<benchgraph::Error> for CliError {
    fn from(err: benchgraph::Error) -> Self {
        CliError::Pipeline { source: err }
    }
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_argument() {
        let err = CliError::InvalidArgument {
            argument: "run_dir".to_string(),
            reason: "'/nope' is not a directory".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("'run_dir'"));
        assert!(display.contains("not a directory"));
    }

    #[test]
    fn test_display_pipeline_forwards_source_message() {
        let err: CliError = benchgraph::Error::NotFound {
            path: "run/input_sizes.csv".to_string(),
        }
        .into();
        assert!(format!("{err}").contains("input_sizes.csv"));
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let err: CliError = benchgraph::Error::NotFound {
            path: "x".to_string(),
        }
        .into();
        assert!(err.source().is_some());

        let err = CliError::InvalidArgument {
            argument: "a".to_string(),
            reason: "b".to_string(),
        };
        assert!(err.source().is_none());
    }
}
