//! Error types for lscompile.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lscompile operations.
#[derive(Error, Debug)]
pub enum LsError {
    /// A header pattern matched more than once within a single line.
    ///
    /// The parser relies on each line carrying at most one diagnostic header,
    /// so this aborts the run instead of producing a wrong issue list.
    #[error("found more than 1 match for '{pattern}' in line {line_number}:\n{line}")]
    MalformedHeader {
        pattern: String,
        line_number: usize,
        line: String,
    },

    /// Neither the argument nor the environment named an input file.
    #[error(
        "path of file with compiler issues must be given as 1. argument \
         (or via the {env} environment variable)"
    )]
    MissingInput { env: &'static str },

    /// The input file could not be read.
    #[error("cannot read '{}': {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl LsError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LsError::MalformedHeader { .. } => exit_codes::MALFORMED_INPUT,
            LsError::MissingInput { .. } => exit_codes::USER_ERROR,
            LsError::InputUnreadable { .. } => exit_codes::USER_ERROR,
            LsError::Output(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for lscompile operations.
pub type Result<T> = std::result::Result<T, LsError>;
