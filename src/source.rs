//! Line source: reads compiler output into ordered lines.

use crate::error::{LsError, Result};
use std::fs;
use std::path::Path;

/// Read a UTF-8 text file and split it into lines.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The lines in file order, without line terminators
/// * `Err(LsError::InputUnreadable)` - The file is missing, unreadable or not UTF-8
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LsError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(split_lines(&text))
}

/// Split text into lines, accepting both `\n` and `\r\n` terminators.
///
/// Empty lines are kept; a trailing terminator does not produce an extra
/// empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn split_keeps_empty_lines() {
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn split_handles_crlf() {
        assert_eq!(
            split_lines("x.swift:1:1: error: e\r\n  src\r\n  ^\r\n"),
            vec!["x.swift:1:1: error: e", "  src", "  ^"]
        );
    }

    #[test]
    fn split_without_trailing_newline() {
        assert_eq!(split_lines("only"), vec!["only"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn read_lines_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("build.log");
        fs::write(&path, "one\ntwo\n").unwrap();

        assert_eq!(read_lines(&path).unwrap(), vec!["one", "two"]);
    }

    #[test]
    fn read_lines_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.log");

        let err = read_lines(&path).unwrap_err();
        match err {
            LsError::InputUnreadable { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected InputUnreadable, got {:?}", other),
        }
    }
}
