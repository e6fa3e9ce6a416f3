//! Exit code constants for the lscompile CLI.
//!
//! - 0: Success (issues may or may not have been found)
//! - 1: User error (no input path, unreadable input, broken stdout)
//! - 2: Malformed input (a header pattern matched more than once in a line)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing or unreadable input, or the report could not be written.
pub const USER_ERROR: i32 = 1;

/// Malformed input: a line carries more than one diagnostic header.
pub const MALFORMED_INPUT: i32 = 2;
