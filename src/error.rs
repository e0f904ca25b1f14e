// third-party imports
use thiserror::Error;

// local imports
use crate::matcher::Malformed;

/// Error is an error which may be reported when validating a pattern.
///
/// Matching itself never fails; a malformed pattern simply matches nothing.
/// Offsets are in bytes from the start of the pattern.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("dangling escape at offset {offset}, nothing follows the backslash")]
    DanglingEscape { offset: usize },
    #[error("unterminated character class starting at offset {offset}")]
    UnterminatedClass { offset: usize },
}

impl Error {
    pub(crate) fn new(malformed: Malformed, offset: usize) -> Self {
        match malformed {
            Malformed::DanglingEscape => Self::DanglingEscape { offset },
            Malformed::UnterminatedClass => Self::UnterminatedClass { offset },
        }
    }

    /// Returns the byte offset of the construct that caused the error.
    pub fn offset(&self) -> usize {
        match self {
            Self::DanglingEscape { offset } | Self::UnterminatedClass { offset } => *offset,
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
