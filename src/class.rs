// local imports
use crate::case::Case;
use crate::utf8::decode;

// ---

/// A bracket expression, `[...]` or `[^...]`, matching exactly one code point.
///
/// The body is a borrowed slice of the pattern, re-scanned on every evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Class<'p> {
    negated: bool,
    body: &'p [u8],
}

impl<'p> Class<'p> {
    /// Splits a bracket expression off the front of `pattern`, which must start right
    /// after the opening `[`.
    ///
    /// Returns the class and the rest of the pattern after the closing `]`,
    /// or `None` if the pattern ends before an unescaped `]` is found.
    pub fn split(pattern: &'p [u8]) -> Option<(Self, &'p [u8])> {
        let (negated, body) = match pattern.split_first() {
            Some((b'^', rest)) => (true, rest),
            _ => (false, pattern),
        };

        let mut members = Members::new(body);
        for _ in members.by_ref() {}
        if !members.closed {
            return None;
        }

        // `]` is a single byte, the rest starts right after it
        let end = body.len() - members.rest.len() - 1;
        Some((
            Self {
                negated,
                body: &body[..end],
            },
            members.rest,
        ))
    }

    /// Returns the members of the class in pattern order.
    pub fn members(&self) -> Members<'p> {
        Members::new(self.body)
    }

    /// Tests whether `ch` belongs to the class, taking negation into account.
    pub fn contains(&self, ch: char, case: Case) -> bool {
        self.members().any(|member| member.contains(ch, case)) != self.negated
    }
}

// ---

/// A single unit of a bracket expression body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Member {
    Single(char),
    Range(char, char),
}

impl Member {
    #[inline]
    pub fn contains(self, ch: char, case: Case) -> bool {
        match self {
            Self::Single(member) => case.equal(member, ch),
            Self::Range(start, end) => {
                let (start, end) = if start > end { (end, start) } else { (start, end) };
                (case.fold(start)..=case.fold(end)).contains(&case.fold(ch))
            }
        }
    }
}

// ---

/// Iterator over the members of a bracket expression body.
///
/// Stops at the first unescaped `]`, setting `closed`, or at the end of input,
/// leaving `closed` unset. A `\` with nothing after it ends the iteration unclosed.
#[derive(Clone, Debug)]
pub struct Members<'p> {
    rest: &'p [u8],
    closed: bool,
}

impl<'p> Members<'p> {
    fn new(body: &'p [u8]) -> Self {
        Self { rest: body, closed: false }
    }
}

impl<'p> Iterator for Members<'p> {
    type Item = Member;

    fn next(&mut self) -> Option<Member> {
        if self.closed {
            return None;
        }

        let (ch, len) = decode(self.rest)?;
        let tail = &self.rest[len..];
        match ch {
            '\\' => {
                let Some((escaped, len)) = decode(tail) else {
                    self.rest = tail;
                    return None;
                };
                self.rest = &tail[len..];
                Some(Member::Single(escaped))
            }
            ']' => {
                self.rest = tail;
                self.closed = true;
                None
            }
            _ if tail.len() > 1 && tail[0] == b'-' => {
                let (end, len) = decode(&tail[1..])?;
                self.rest = &tail[1 + len..];
                Some(Member::Range(ch, end))
            }
            _ => {
                self.rest = tail;
                Some(Member::Single(ch))
            }
        }
    }
}
