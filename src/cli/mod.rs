//! CLI argument parsing for lscompile.
//!
//! Uses clap derive macros for declarative argument definitions. The parsed
//! values are turned into [`Settings`] before anything else runs.

use crate::config::{INPUT_PATH_ENV, Settings};
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// lscompile: list errors and warnings from verbose compiler output.
///
/// Scans a saved compiler log (for example from swiftc or xcodebuild) and
/// prints each diagnostic with its source line and pointer, errors only
/// unless warnings are requested.
#[derive(Parser, Debug)]
#[command(name = "lscompile")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the file with the compiler output.
    #[arg(env = INPUT_PATH_ENV, allow_hyphen_values = true)]
    pub input: Option<PathBuf>,

    /// Pass "Y" to list warnings as well as errors.
    #[arg(value_name = "LIST_WARNINGS", allow_hyphen_values = true)]
    pub list_warnings: Option<String>,

    /// Further arguments are ignored, whatever they look like.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn try_parse_args() -> std::result::Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Resolve the run settings, warning about any ignored arguments.
    pub fn settings(&self) -> Result<Settings> {
        for arg in &self.extra {
            log::warn!("will ignore excess argument '{}'", arg);
        }
        Settings::resolve(self.input.clone(), self.list_warnings.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LsError;

    #[test]
    fn parses_path_and_warnings_flag() {
        let cli = Cli::try_parse_from(["lscompile", "build.log", "y"]).unwrap();

        let settings = cli.settings().unwrap();
        assert_eq!(settings.input_path, PathBuf::from("build.log"));
        assert!(settings.include_warnings);
        assert!(!cli.verbose);
    }

    #[test]
    fn excess_arguments_are_accepted() {
        let cli = Cli::try_parse_from(["lscompile", "-v", "build.log", "n", "extra", "more"]).unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.extra, vec!["extra", "more"]);
        assert!(!cli.settings().unwrap().include_warnings);
    }

    #[test]
    fn hyphen_leading_extras_are_accepted() {
        let cli = Cli::try_parse_from(["lscompile", "build.log", "y", "--foo", "-x"]).unwrap();

        assert_eq!(cli.extra, vec!["--foo", "-x"]);
        assert!(cli.settings().unwrap().include_warnings);
    }

    #[test]
    fn hyphen_leading_input_path_is_accepted() {
        let cli = Cli::try_parse_from(["lscompile", "-build.log"]).unwrap();

        assert_eq!(cli.input, Some(PathBuf::from("-build.log")));
        assert!(!cli.verbose);
    }

    #[test]
    fn verbose_flag_still_recognized_before_input() {
        let cli = Cli::try_parse_from(["lscompile", "-v", "build.log"]).unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.input, Some(PathBuf::from("build.log")));
    }

    #[test]
    fn missing_path_surfaces_as_settings_error() {
        let cli = Cli {
            input: None,
            list_warnings: None,
            extra: Vec::new(),
            verbose: false,
        };

        assert!(matches!(cli.settings(), Err(LsError::MissingInput { .. })));
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
