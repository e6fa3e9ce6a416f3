//! Run settings for lscompile.
//!
//! The input path and the "include warnings" flag are the only settings.
//! They are resolved once at startup from the command line (which already
//! folds in the environment default) and passed down explicitly.

use crate::error::{LsError, Result};
use std::path::PathBuf;

/// Environment variable supplying the default input path.
pub const INPUT_PATH_ENV: &str = "compilerIssuesPath";

/// Value of the warnings argument that turns warning output on.
const LIST_WARNINGS_YES: &str = "Y";

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// File holding the compiler output.
    pub input_path: PathBuf,
    /// Whether warnings are reported in addition to errors.
    pub include_warnings: bool,
}

impl Settings {
    /// Build settings from the raw command-line values.
    ///
    /// # Arguments
    ///
    /// * `input` - Input path from the argument or the environment, if any
    /// * `list_warnings` - The warnings argument; only "Y" (any case) enables warnings
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - Resolved settings
    /// * `Err(LsError::MissingInput)` - No input path was given
    pub fn resolve(input: Option<PathBuf>, list_warnings: Option<&str>) -> Result<Self> {
        let input_path = input
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(LsError::MissingInput { env: INPUT_PATH_ENV })?;

        let include_warnings =
            list_warnings.is_some_and(|value| value.eq_ignore_ascii_case(LIST_WARNINGS_YES));

        Ok(Self {
            input_path,
            include_warnings,
        })
    }
}
