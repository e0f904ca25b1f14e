// local imports
use crate::case::Case;
use crate::class::Class;
use crate::utf8::{char_len, decode};

// ---

/// Tests whether the whole `subject` matches `pattern`.
///
/// Both inputs are UTF-8 byte sequences; malformed bytes decode to U+FFFD one byte at a time.
/// The function is total: malformed pattern constructs make the match fail rather than error.
pub fn matches(subject: &[u8], pattern: &[u8], case: Case) -> bool {
    Search::new(case).run(subject, pattern)
}

// ---

/// A single step of a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Term<'p> {
    Literal(char),
    Escaped(char),
    AnyOne,
    AnyRun,
    Class(Class<'p>),
}

impl Term<'_> {
    /// Tests whether the term accepts the subject code point `ch`.
    ///
    /// [`Term::AnyRun`] spans a variable number of code points and is never tested this way.
    #[inline]
    fn accepts(&self, ch: char, case: Case) -> bool {
        match self {
            Self::Literal(expected) | Self::Escaped(expected) => case.equal(*expected, ch),
            Self::AnyOne => true,
            Self::Class(class) => class.contains(ch, case),
            Self::AnyRun => false,
        }
    }
}

/// A pattern construct that cannot be decoded into a term.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Malformed {
    /// `\` is the last byte of the pattern.
    DanglingEscape,
    /// `[` has no closing `]` before the end of the pattern.
    UnterminatedClass,
}

/// Decodes the term at the front of `pattern`.
///
/// Returns `None` for an empty pattern, otherwise the term with the rest of the pattern.
/// A run of consecutive `*` is returned as a single [`Term::AnyRun`].
pub fn next_term(pattern: &[u8]) -> Option<Result<(Term<'_>, &[u8]), Malformed>> {
    let (ch, len) = decode(pattern)?;
    let rest = &pattern[len..];

    Some(match ch {
        '*' => Ok((Term::AnyRun, skip_stars(rest))),
        '?' => Ok((Term::AnyOne, rest)),
        '[' => Class::split(rest)
            .map(|(class, rest)| (Term::Class(class), rest))
            .ok_or(Malformed::UnterminatedClass),
        '\\' => match decode(rest) {
            Some((escaped, len)) => Ok((Term::Escaped(escaped), &rest[len..])),
            None => Err(Malformed::DanglingEscape),
        },
        _ => Ok((Term::Literal(ch), rest)),
    })
}

#[inline]
fn skip_stars(pattern: &[u8]) -> &[u8] {
    let n = pattern.iter().take_while(|&&b| b == b'*').count();
    &pattern[n..]
}

// ---

/// State of one top-level match, threaded through the recursion for `*`.
struct Search {
    case: Case,
    // Set once no suffix of the current subject can satisfy the remaining pattern.
    // Every enclosing `*` gives up as soon as it sees it.
    cutoff: bool,
}

impl Search {
    fn new(case: Case) -> Self {
        Self { case, cutoff: false }
    }

    fn run(&mut self, mut subject: &[u8], mut pattern: &[u8]) -> bool {
        while let Some(next) = next_term(pattern) {
            let Ok((term, rest)) = next else {
                return false;
            };

            if let Term::AnyRun = term {
                return self.any_run(subject, rest);
            }

            let Some((ch, len)) = decode(subject) else {
                return false;
            };
            if !term.accepts(ch, self.case) {
                return false;
            }

            subject = &subject[len..];
            pattern = rest;

            if subject.is_empty() {
                pattern = skip_stars(pattern);
                break;
            }
        }

        pattern.is_empty() && subject.is_empty()
    }

    fn any_run(&mut self, mut subject: &[u8], pattern: &[u8]) -> bool {
        if pattern.is_empty() {
            return true;
        }

        while !subject.is_empty() {
            if self.run(subject, pattern) {
                return true;
            }
            if self.cutoff {
                return false;
            }
            subject = &subject[char_len(subject)..];
        }

        log::trace!("no suffix can match {:?}, cutting off longer runs", String::from_utf8_lossy(pattern));
        self.cutoff = true;
        false
    }
}
