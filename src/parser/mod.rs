//! Issue parser: a line-driven state machine over compiler output.
//!
//! The parser makes a single left-to-right pass with one line of lookahead.
//! Whether an issue has the three-line or the five-line shape is only known
//! once the line after the source pointer has been seen, so that lookup is a
//! state of its own rather than a backtrack.
//!
//! Behavior at the edges:
//! - Lines that match no header while idle are discarded.
//! - A non-note line after a source pointer ends the issue and is discarded,
//!   even when it is itself a header.
//! - Input ending after a source pointer keeps the three-line issue; input
//!   ending anywhere else mid-issue drops the issue.

mod machine;
mod state;


pub use machine::{IssueParser, parse_issues};
pub use state::ParserState;
