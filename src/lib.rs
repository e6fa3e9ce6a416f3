//! lscompile: list errors and warnings from verbose compiler output.
//!
//! The pipeline is: read lines ([`source`]) → classify and assemble issues
//! ([`classify`], [`parser`]) → print them ([`report`]).

pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit_codes;
pub mod issue;
pub mod parser;
pub mod report;
pub mod source;

use config::Settings;
use error::Result;
use issue::IssueKind;
use std::io::Write;

/// Run one listing: read the input, parse it and write the report to `out`.
///
/// Nothing is written when the input contains a malformed header line.
pub fn run<W: Write>(settings: &Settings, out: W) -> Result<()> {
    log::debug!("input path: {}", settings.input_path.display());
    log::debug!("list warnings: {}", settings.include_warnings);

    let lines = source::read_lines(&settings.input_path)?;
    let issues = parser::parse_issues(&lines)?;

    log::debug!(
        "issues: {} ({} errors, {} warnings)",
        issues.len(),
        issues.count(IssueKind::Error),
        issues.count(IssueKind::Warning)
    );

    report::Reporter::new(settings.include_warnings).write_to(&issues, out)?;
    Ok(())
}
