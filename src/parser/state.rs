//! Parser states and the in-progress issue data each of them owns.

use std::fmt;

use crate::issue::{Issue, IssueKind, NoteBlock};

/// Observable state of an [`IssueParser`](super::IssueParser).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// No issue in progress.
    Idle,
    ExpectSourceLine,
    ExpectSourcePointer,
    /// A three-line issue is complete; the next line may open a note block.
    ExpectNoteHeader,
    ExpectReferencedLine,
    ExpectReferencedPointer,
}

impl fmt::Display for ParserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParserState::Idle => "idle",
            ParserState::ExpectSourceLine => "expecting source line",
            ParserState::ExpectSourcePointer => "expecting source pointer",
            ParserState::ExpectNoteHeader => "expecting note header",
            ParserState::ExpectReferencedLine => "expecting referenced line",
            ParserState::ExpectReferencedPointer => "expecting referenced pointer",
        };
        f.write_str(name)
    }
}

/// Header of an issue that has just been opened.
#[derive(Debug)]
pub(super) struct OpenIssue {
    pub kind: IssueKind,
    pub header_line: String,
}

/// Header, source line and pointer: everything a three-line issue needs.
#[derive(Debug)]
pub(super) struct IssueBody {
    pub kind: IssueKind,
    pub header_line: String,
    pub source_line: String,
    pub source_pointer: String,
}

impl IssueBody {
    pub fn into_issue(self, note: Option<NoteBlock>) -> Issue {
        Issue::new(
            self.kind,
            self.header_line,
            self.source_line,
            self.source_pointer,
            note,
        )
    }
}

/// Parser state together with the in-progress issue it owns.
///
/// The issue data moves from one variant to the next, so there is never more
/// than one issue in progress and nothing else can hold a reference to it.
#[derive(Debug, Default)]
pub(super) enum Pending {
    #[default]
    Idle,
    SourceLine(OpenIssue),
    SourcePointer(OpenIssue, String),
    NoteHeader(IssueBody),
    ReferencedLine(IssueBody, String),
    ReferencedPointer(IssueBody, String, String),
}

impl Pending {
    pub fn state(&self) -> ParserState {
        match self {
            Pending::Idle => ParserState::Idle,
            Pending::SourceLine(..) => ParserState::ExpectSourceLine,
            Pending::SourcePointer(..) => ParserState::ExpectSourcePointer,
            Pending::NoteHeader(..) => ParserState::ExpectNoteHeader,
            Pending::ReferencedLine(..) => ParserState::ExpectReferencedLine,
            Pending::ReferencedPointer(..) => ParserState::ExpectReferencedPointer,
        }
    }
}
