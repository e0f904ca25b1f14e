// third-party imports
use serde::{Deserialize, Serialize};

// ---

/// Case sensitivity of a match.
///
/// In [`Case::Insensitive`] mode every compared code point is mapped through
/// its simple lowercase form at comparison time; neither input is transformed up front.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Case {
    #[default]
    Sensitive,
    Insensitive,
}

impl Case {
    #[inline]
    pub const fn from_fold(fold: bool) -> Self {
        if fold { Self::Insensitive } else { Self::Sensitive }
    }

    /// Maps `ch` to the form used for comparison.
    #[inline]
    pub fn fold(self, ch: char) -> char {
        match self {
            Self::Sensitive => ch,
            Self::Insensitive => lower(ch),
        }
    }

    #[inline]
    pub fn equal(self, a: char, b: char) -> bool {
        a == b || (self == Self::Insensitive && lower(a) == lower(b))
    }
}

/// Simple lowercase mapping: a code point whose full lowercase form expands to several
/// code points (only U+0130) maps to the first of them.
#[inline]
fn lower(ch: char) -> char {
    if ch.is_ascii() {
        ch.to_ascii_lowercase()
    } else {
        ch.to_lowercase().next().unwrap_or(ch)
    }
}
