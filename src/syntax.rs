//! Pattern inspection without matching.

// third-party imports
use memchr::{memchr, memchr3};

// local imports
use crate::error::{Error, Result};
use crate::matcher::next_term;

/// Checks that every construct of `pattern` is well-formed.
///
/// A pattern that passes validation can only fail to match because of the subject,
/// never because of an unterminated `[` or a trailing `\`. A `\` at the very end of an
/// unclosed class is reported as an unterminated class.
///
/// # Examples
///
/// ```
/// use keyglob::{Error, validate};
///
/// assert!(validate("user:[0-9]*").is_ok());
/// assert_eq!(validate("user:[0-9"), Err(Error::UnterminatedClass { offset: 5 }));
/// assert_eq!(validate(r"tail\"), Err(Error::DanglingEscape { offset: 4 }));
/// ```
pub fn validate(pattern: &str) -> Result<()> {
    validate_bytes(pattern.as_bytes())
}

/// Same as [`validate`] for a pattern given as raw bytes.
pub fn validate_bytes(pattern: &[u8]) -> Result<()> {
    let mut rest = pattern;
    while let Some(next) = next_term(rest) {
        let offset = pattern.len() - rest.len();
        match next {
            Ok((_, tail)) => rest = tail,
            Err(malformed) => {
                let err = Error::new(malformed, offset);
                log::debug!("rejected pattern {:?}: {}", String::from_utf8_lossy(pattern), err);
                return Err(err);
            }
        }
    }
    Ok(())
}

/// Tests whether `pattern` contains any byte with a special meaning: `*`, `?`, `[` or `\`.
///
/// A pattern without them matches only subjects equal to it, code point by code point.
#[inline]
pub fn has_wildcards(pattern: &str) -> bool {
    let bytes = pattern.as_bytes();
    memchr3(b'*', b'?', b'[', bytes).is_some() || memchr(b'\\', bytes).is_some()
}
