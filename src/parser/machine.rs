//! The issue state machine.

use std::mem;

use crate::classify::{Classifier, HeaderPattern};
use crate::error::Result;
use crate::issue::{IssueCollection, IssueKind, NoteBlock};

use super::state::{IssueBody, OpenIssue, ParserState, Pending};

/// Incremental issue parser.
///
/// Feed lines in order with [`feed`](Self::feed), then call
/// [`finish`](Self::finish) to obtain the completed issues.
#[derive(Debug, Default)]
pub struct IssueParser {
    classifier: Classifier,
    pending: Pending,
    issues: IssueCollection,
    line_number: usize,
}

impl IssueParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state of the machine.
    pub fn state(&self) -> ParserState {
        self.pending.state()
    }

    /// Issues completed so far, in creation order.
    pub fn issues(&self) -> &IssueCollection {
        &self.issues
    }

    /// Consume the next input line.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The line was consumed (possibly discarded)
    /// * `Err(LsError::MalformedHeader)` - An evaluated header pattern matched
    ///   the line more than once; the parser must not be fed further
    pub fn feed(&mut self, line: &str) -> Result<()> {
        self.line_number += 1;
        let line_number = self.line_number;

        self.pending = match mem::take(&mut self.pending) {
            Pending::Idle => {
                // Error takes precedence; the warning pattern is only tried
                // when the error pattern does not match.
                let kind = if self
                    .classifier
                    .matches(HeaderPattern::Error, line, line_number)?
                {
                    Some(IssueKind::Error)
                } else if self
                    .classifier
                    .matches(HeaderPattern::Warning, line, line_number)?
                {
                    Some(IssueKind::Warning)
                } else {
                    None
                };

                match kind {
                    Some(kind) => Pending::SourceLine(OpenIssue {
                        kind,
                        header_line: line.to_string(),
                    }),
                    None => Pending::Idle,
                }
            }
            Pending::SourceLine(open) => Pending::SourcePointer(open, line.to_string()),
            Pending::SourcePointer(open, source_line) => Pending::NoteHeader(IssueBody {
                kind: open.kind,
                header_line: open.header_line,
                source_line,
                source_pointer: line.to_string(),
            }),
            Pending::NoteHeader(body) => {
                if self
                    .classifier
                    .matches(HeaderPattern::Note, line, line_number)?
                {
                    Pending::ReferencedLine(body, line.to_string())
                } else {
                    // The line is dropped, not re-checked as a new header.
                    self.issues.push(body.into_issue(None));
                    Pending::Idle
                }
            }
            Pending::ReferencedLine(body, note_line) => {
                Pending::ReferencedPointer(body, note_line, line.to_string())
            }
            Pending::ReferencedPointer(body, note_line, referenced_source_line) => {
                self.issues.push(body.into_issue(Some(NoteBlock {
                    note_line,
                    referenced_source_line,
                    referenced_pointer: line.to_string(),
                })));
                Pending::Idle
            }
        };

        Ok(())
    }

    /// Signal end of input and return the completed issues.
    pub fn finish(mut self) -> IssueCollection {
        match mem::take(&mut self.pending) {
            Pending::Idle => {}
            Pending::NoteHeader(body) => self.issues.push(body.into_issue(None)),
            unfinished => {
                log::debug!(
                    "input ended while {}; dropping unfinished issue",
                    unfinished.state()
                );
            }
        }
        self.issues
    }
}

/// Parse a complete sequence of lines into issues.
///
/// # Example
///
/// ```
/// use lscompile::issue::IssueKind;
/// use lscompile::parser::parse_issues;
///
/// let lines = ["foo.swift:10:3: error: bad token", "  let x = y", "  ^"];
/// let issues = parse_issues(lines).unwrap();
/// assert_eq!(issues.len(), 1);
/// assert_eq!(issues.count(IssueKind::Error), 1);
/// ```
pub fn parse_issues<I, S>(lines: I) -> Result<IssueCollection>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = IssueParser::new();
    for line in lines {
        parser.feed(line.as_ref())?;
    }
    Ok(parser.finish())
}
