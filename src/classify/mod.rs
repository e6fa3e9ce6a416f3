//! Diagnostic header classification.
//!
//! A header line contains a `<line>:<col>:` locator immediately followed by a
//! label: `error:`, `warning:` or `note:`. Matching is a substring search, so
//! the file path in front of the locator can be anything.
//!
//! Each pattern may match a line at most once. A second match means the line
//! cannot be classified unambiguously and the whole run is aborted with
//! [`LsError::MalformedHeader`](crate::error::LsError::MalformedHeader).
//!
//! The classifier is stateless: which pattern to try is up to the parser.

mod patterns;


pub use patterns::{Classifier, HeaderPattern};
