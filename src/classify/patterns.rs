//! Compiled header patterns.

use crate::error::{LsError, Result};
use regex::Regex;
use std::sync::LazyLock;

const ERROR_PATTERN: &str = r"\d+:\d+: error:";
const WARNING_PATTERN: &str = r"\d+:\d+: warning:";
const NOTE_PATTERN: &str = r"\d+:\d+: note:";

static ERROR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ERROR_PATTERN).expect("error header pattern is valid"));
static WARNING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WARNING_PATTERN).expect("warning header pattern is valid"));
static NOTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NOTE_PATTERN).expect("note header pattern is valid"));

/// One of the three fixed header patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPattern {
    Error,
    Warning,
    Note,
}

impl HeaderPattern {
    /// The regex source text of this pattern.
    pub fn as_str(self) -> &'static str {
        match self {
            HeaderPattern::Error => ERROR_PATTERN,
            HeaderPattern::Warning => WARNING_PATTERN,
            HeaderPattern::Note => NOTE_PATTERN,
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            HeaderPattern::Error => LazyLock::force(&ERROR_REGEX),
            HeaderPattern::Warning => LazyLock::force(&WARNING_REGEX),
            HeaderPattern::Note => LazyLock::force(&NOTE_REGEX),
        }
    }
}

/// Stateless matcher for the header patterns.
///
/// The regexes are compiled once per process and shared by every classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier;

impl Classifier {
    pub fn new() -> Self {
        Self
    }

    /// Check whether `line` matches `pattern`, requiring at most one match.
    ///
    /// # Arguments
    ///
    /// * `pattern` - The header pattern to evaluate
    /// * `line` - The line content (without trailing newline)
    /// * `line_number` - 1-based position of the line, used for error reporting
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - Exactly one match
    /// * `Ok(false)` - No match
    /// * `Err(LsError::MalformedHeader)` - Two or more matches
    ///
    /// # Example
    ///
    /// ```
    /// use lscompile::classify::{Classifier, HeaderPattern};
    ///
    /// let classifier = Classifier::new();
    /// let line = "foo.swift:10:3: error: bad token";
    /// assert!(classifier.matches(HeaderPattern::Error, line, 1).unwrap());
    /// assert!(!classifier.matches(HeaderPattern::Warning, line, 1).unwrap());
    /// ```
    pub fn matches(&self, pattern: HeaderPattern, line: &str, line_number: usize) -> Result<bool> {
        // Two matches are enough to know the line is malformed.
        match pattern.regex().find_iter(line).take(2).count() {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(LsError::MalformedHeader {
                pattern: pattern.as_str().to_string(),
                line_number,
                line: line.to_string(),
            }),
        }
    }
}
