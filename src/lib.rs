//! Glob-style wildcard matching for keys, topics and paths.
//!
//! A subject is matched as a whole against a pattern, one Unicode code point at a time,
//! the way key-pattern scans and pub/sub topic filters match their inputs.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more code points
//! - `?` - Matches exactly one code point
//! - `[abc]` - Matches any one of the listed code points
//! - `[a-z]` - Matches one code point in the inclusive range, endpoints may come in any order
//! - `[^abc]`, `[^a-z]` - Matches one code point not in the class
//! - `\c` - Matches `c` literally, also inside a class
//! - Any other code point matches itself
//!
//! Inside a class, `-` followed by at least one more byte forms a range and its end point is
//! taken verbatim, so `[a-]` is not closed by its `]`. A leading `-` is a literal member.
//! `[]` matches nothing and `[^]` matches any single code point.
//!
//! # Malformed Patterns
//!
//! Matching never fails. An unterminated class (`[abc`) or a trailing backslash (`abc\`)
//! makes the whole match return `false`; it is never read as a literal. Use [`validate`]
//! to detect such patterns up front. Input that is not valid UTF-8 is compared as U+FFFD,
//! one per offending byte.
//!
//! # Examples
//!
//! ```
//! use keyglob::{matches, matches_fold};
//!
//! assert!(matches("hello world", "hello*"));
//! assert!(!matches("hello world", "jello*"));
//! assert!(matches("abc", "a[a-z]c"));
//! assert!(matches("azc", "a[^a-c]c"));
//! assert!(matches("hello*world", r"hello\*world"));
//! assert!(matches("my-folder/India/Karnataka/Ban", "my-folder/In*/Ka*/Ban"));
//!
//! assert!(matches_fold("NEWS/Sports", "news/*"));
//! ```
//!
//! # Cost
//!
//! Backtracking for `*` stops as soon as a nested `*` has proven that no shorter
//! remainder of the subject can match, which keeps patterns with many wildcards
//! polynomial in the input size.

// public modules
pub mod error;
pub mod syntax;

// private modules
mod case;
mod class;
mod matcher;
mod options;
mod utf8;

// public uses
pub use case::Case;
pub use error::{Error, Result};
pub use options::MatchOptions;
pub use syntax::{has_wildcards, validate, validate_bytes};

/// Tests whether the whole `subject` matches `pattern`, case-sensitively.
#[inline]
pub fn matches(subject: &str, pattern: &str) -> bool {
    MatchOptions::new(Case::Sensitive).matches(subject, pattern)
}

/// Tests whether the whole `subject` matches `pattern`, ignoring case.
///
/// Code points are compared through their simple lowercase mapping,
/// which covers ASCII as well as the rest of Unicode.
#[inline]
pub fn matches_fold(subject: &str, pattern: &str) -> bool {
    MatchOptions::new(Case::Insensitive).matches(subject, pattern)
}

/// Same as [`matches`] for a subject and a pattern given as borrowed raw bytes.
///
/// Neither buffer is copied or validated up front.
#[inline]
pub fn matches_bytes(subject: &[u8], pattern: &[u8]) -> bool {
    MatchOptions::new(Case::Sensitive).matches_bytes(subject, pattern)
}

/// Same as [`matches_fold`] for a subject and a pattern given as borrowed raw bytes.
#[inline]
pub fn matches_bytes_fold(subject: &[u8], pattern: &[u8]) -> bool {
    MatchOptions::new(Case::Insensitive).matches_bytes(subject, pattern)
}
