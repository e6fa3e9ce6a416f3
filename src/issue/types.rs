//! Core issue types.

/// Severity of a diagnostic, fixed by the header line that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueKind {
    Error,
    Warning,
}

impl IssueKind {
    /// Upper-case label used in report banners.
    pub fn label(self) -> &'static str {
        match self {
            IssueKind::Error => "ERROR",
            IssueKind::Warning => "WARNING",
        }
    }
}

/// Which of the two diagnostic layouts an issue was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueShape {
    /// Header, source line, source pointer.
    ThreeLine,
    /// Three-line shape followed by a note header, referenced line and pointer.
    FiveLine,
}

/// The trailing note of a five-line issue.
///
/// All three lines are present together or the block is absent altogether.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteBlock {
    /// The `file:line:col: note: ...` line.
    pub note_line: String,
    /// The source line the note refers to.
    pub referenced_source_line: String,
    /// Caret line under the referenced source line.
    pub referenced_pointer: String,
}

/// A completed diagnostic finding.
///
/// Issues are only built by the parser, so every value a caller can observe
/// has its header, source line and source pointer set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    kind: IssueKind,
    header_line: String,
    source_line: String,
    source_pointer: String,
    note: Option<NoteBlock>,
}

impl Issue {
    pub(crate) fn new(
        kind: IssueKind,
        header_line: String,
        source_line: String,
        source_pointer: String,
        note: Option<NoteBlock>,
    ) -> Self {
        Self {
            kind,
            header_line,
            source_line,
            source_pointer,
            note,
        }
    }

    pub fn kind(&self) -> IssueKind {
        self.kind
    }

    /// The verbatim header line (locator and message).
    pub fn header_line(&self) -> &str {
        &self.header_line
    }

    /// The verbatim source line following the header.
    pub fn source_line(&self) -> &str {
        &self.source_line
    }

    /// The verbatim caret line under the source line.
    pub fn source_pointer(&self) -> &str {
        &self.source_pointer
    }

    pub fn note(&self) -> Option<&NoteBlock> {
        self.note.as_ref()
    }

    pub fn note_line(&self) -> Option<&str> {
        self.note.as_ref().map(|n| n.note_line.as_str())
    }

    pub fn referenced_source_line(&self) -> Option<&str> {
        self.note.as_ref().map(|n| n.referenced_source_line.as_str())
    }

    pub fn referenced_pointer(&self) -> Option<&str> {
        self.note.as_ref().map(|n| n.referenced_pointer.as_str())
    }

    pub fn shape(&self) -> IssueShape {
        if self.note.is_some() {
            IssueShape::FiveLine
        } else {
            IssueShape::ThreeLine
        }
    }
}
