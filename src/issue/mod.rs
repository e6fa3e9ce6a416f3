//! Issue records assembled from compiler output.
//!
//! An issue is either a three-line diagnostic (header, source line, pointer)
//! or a five-line one that additionally carries a note block pointing at a
//! referenced source line:
//!
//! ```text
//! RootViewController.swift:49:14: error: use of unresolved identifier 'mountainPin'
//!         for pin in mountainPin {
//!                    ^~~~~~~~~~~
//! Global.swift:4:5: note: did you mean 'mountainPins'?
//! var mountainPins = [MyPin]()
//!     ^
//! ```

mod collection;
mod types;

pub use collection::IssueCollection;
pub use types::{Issue, IssueKind, IssueShape, NoteBlock};
