// third-party imports
use serde::{Deserialize, Serialize};

// local imports
use crate::case::Case;
use crate::matcher;
use crate::syntax::has_wildcards;

// ---

/// Options controlling how subjects are matched against patterns.
///
/// Can be embedded into a configuration file section:
///
/// ```
/// use keyglob::{Case, MatchOptions};
///
/// let options: MatchOptions = json::from_str(r#"{"case": "insensitive"}"#).unwrap();
/// assert_eq!(options.case, Case::Insensitive);
/// assert!(options.matches("Topic/News", "topic/*"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MatchOptions {
    pub case: Case,
}

impl MatchOptions {
    pub const fn new(case: Case) -> Self {
        Self { case }
    }

    /// Tests whether the whole `subject` matches `pattern`.
    pub fn matches(&self, subject: &str, pattern: &str) -> bool {
        if !has_wildcards(pattern) {
            let fold = |ch: char| self.case.fold(ch);
            return match self.case {
                Case::Sensitive => subject == pattern,
                Case::Insensitive => subject.chars().map(fold).eq(pattern.chars().map(fold)),
            };
        }

        matcher::matches(subject.as_bytes(), pattern.as_bytes(), self.case)
    }

    /// Tests whether the whole `subject` matches `pattern`, both given as borrowed raw bytes.
    ///
    /// Bytes that are not valid UTF-8 are compared as U+FFFD, one per byte.
    pub fn matches_bytes(&self, subject: &[u8], pattern: &[u8]) -> bool {
        matcher::matches(subject, pattern, self.case)
    }
}
