//! Plain-text report of collected issues.
//!
//! Output format:
//! ```text
//! ----  WARNING issue no. 0
//! Model.swift:3:9: warning: variable 'y' was never mutated
//!     var y = 2
//!     ^
//! ----  ERROR issue no. 0
//! a.swift:5:1: error: unresolved identifier 'p'
//! for x in p
//!     ^
//! b.swift:2:1: note: did you mean 'ps'?
//! var ps = []
//! ```
//!
//! Warnings come first and only when enabled. Each section numbers its issues
//! from zero. The referenced pointer of a note block is never printed.

use crate::issue::{Issue, IssueCollection, IssueKind};
use std::io::{self, Write};

/// Writes issues grouped by kind.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    include_warnings: bool,
}

impl Reporter {
    pub fn new(include_warnings: bool) -> Self {
        Self { include_warnings }
    }

    /// Write the report for `issues` to `out`.
    pub fn write_to<W: Write>(&self, issues: &IssueCollection, mut out: W) -> io::Result<()> {
        if self.include_warnings {
            write_section(issues, IssueKind::Warning, &mut out)?;
        }
        write_section(issues, IssueKind::Error, &mut out)?;
        out.flush()
    }

    /// Render the report into a string.
    pub fn render(&self, issues: &IssueCollection) -> String {
        let mut buf = Vec::new();
        self.write_to(issues, &mut buf)
            .expect("writing to a Vec cannot fail");
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn write_section<W: Write>(issues: &IssueCollection, kind: IssueKind, out: &mut W) -> io::Result<()> {
    for (index, issue) in issues.of_kind(kind).enumerate() {
        writeln!(out, "----  {} issue no. {}", kind.label(), index)?;
        write_issue(issue, out)?;
    }
    Ok(())
}

fn write_issue<W: Write>(issue: &Issue, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", issue.header_line())?;
    writeln!(out, "{}", issue.source_line())?;
    writeln!(out, "{}", issue.source_pointer())?;

    for line in [issue.note_line(), issue.referenced_source_line()]
        .into_iter()
        .flatten()
    {
        if !line.is_empty() {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
