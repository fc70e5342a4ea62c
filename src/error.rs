use std::fmt::{self, Formatter};

use derive_more::{Display, Error, IsVariant};

/// Why a string was rejected by the path grammar.
///
/// The [`Display`](fmt::Display) output is the human-readable explanation. Failures inside a label or
/// identifier are wrapped with the component they occurred in, so the message locates the
/// problem without needing offsets.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, IsVariant)]
pub enum Diagnostic {
    #[display("path must start with a slash")]
    MissingLeadingSlash,
    #[display("path cannot end with a slash")]
    TrailingSlash,
    #[display("path cannot have consecutive slashes")]
    ConsecutiveSlashes,
    #[display("Invalid domain \"{domain}\": {reason}")]
    InvalidDomain {
        domain: String,
        reason: Reason,
    },
    #[display("Invalid subpath \"{segment}\": {reason}")]
    InvalidSubpath {
        segment: String,
        reason: Reason,
    },
    #[display("{_0}")]
    InvalidIdent(#[error(not(source))] Reason),
    /// A term parsed cleanly but left input behind. Every term of the grammar either runs to the
    /// end or fails, so this is only a guard on whole-input validation.
    #[display("unexpected trailing characters \"{rest}\"")]
    TrailingInput {
        rest: String,
    },
}

/// A problem with a single label or identifier, e.g. "identifier cannot start with a number".
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{subject} {problem}")]
pub struct Reason {
    subject: String,
    problem: Problem,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, IsVariant)]
pub enum Problem {
    #[display("cannot be empty")]
    Empty,
    #[display("cannot start with a number")]
    LeadingDigit,
    #[display("cannot start with '-'")]
    LeadingDash,
    #[display("cannot start with '.'")]
    LeadingDot,
    #[display("{_0}")]
    Disallowed(CharSet),
}

/// The deduplicated characters which made a term invalid, in the order they were found.
///
/// Whitespace is tracked separately and never listed, since it would be unreadable in a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    chars: Vec<char>,
    whitespace: bool,
}

/// A string handed over to [`StructuredPath::try_make_owned`](crate::StructuredPath::try_make_owned)
/// which didn't pass validation. The input is handed back untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{diagnostic}")]
pub struct Rejected {
    pub(crate) input: String,
    pub(crate) diagnostic: Diagnostic,
}

impl Reason {
    pub(crate) fn new(subject: &str, problem: Problem) -> Reason {
        Reason {
            subject: subject.to_owned(),
            problem,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub const fn problem(&self) -> &Problem {
        &self.problem
    }
}

impl CharSet {
    pub(crate) fn insert(&mut self, ch: char) {
        if ch.is_whitespace() {
            self.whitespace = true;
        } else if !self.chars.contains(&ch) {
            self.chars.push(ch);
        }
    }

    /// The disallowed characters other than whitespace.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub const fn has_whitespace(&self) -> bool {
        self.whitespace
    }
}

impl fmt::Display for CharSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (self.whitespace, self.chars.is_empty()) {
            (true, true) => return write!(f, "cannot contain whitespace"),
            (true, false) => write!(f, "cannot contain whitespace or the following characters: ")?,
            (false, _) => write!(f, "cannot contain the following characters: ")?,
        }

        for (i, ch) in self.chars.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{ch}")?;
        }

        Ok(())
    }
}

impl Rejected {
    pub const fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn into_input(self) -> String {
        self.input
    }

    pub fn into_parts(self) -> (String, Diagnostic) {
        (self.input, self.diagnostic)
    }
}

impl From<Rejected> for Diagnostic {
    fn from(value: Rejected) -> Self {
        value.diagnostic
    }
}
