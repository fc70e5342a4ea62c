use derive_more::IsVariant;

use crate::error::{CharSet, Diagnostic, Problem, Reason};
use crate::grammar::Stops;
use crate::grammar::chars::{is_alnum, is_label_tail};

pub(crate) const DEFAULT_TERM: &str = "identifier";
const LABEL_TERM: &str = "label";

/// What went wrong with a single label or identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub(crate) enum Flaw {
    Empty,
    LeadingDigit,
    LeadingDash,
    LeadingDot,
    /// The term starting at `start` holds characters outside of its class. The offending run ends
    /// at the next stop character or the end of the text.
    Disallowed { start: usize, stops: Stops },
}

/// A grammar violation, as positions into the scanned text.
///
/// Faults are cheap to produce and carry nothing that needs allocating. Turning one into a
/// [`Diagnostic`] (and rescanning for offending characters) only happens through
/// [`Fault::diagnose`], so yes/no validation never pays for message construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Fault {
    NoLeadingSlash,
    TrailingSlash,
    ConsecutiveSlashes,
    TrailingInput { start: usize },
    Ident(Flaw),
    Domain { start: usize, flaw: Flaw },
    Subpath { start: usize, flaw: Flaw },
}

#[derive(Debug, Clone, Copy)]
enum Term {
    Label,
    Ident,
}

impl Fault {
    pub(crate) fn diagnose(self, text: &str, term_name: Option<&str>) -> Diagnostic {
        match self {
            Fault::NoLeadingSlash => Diagnostic::MissingLeadingSlash,
            Fault::TrailingSlash => Diagnostic::TrailingSlash,
            Fault::ConsecutiveSlashes => Diagnostic::ConsecutiveSlashes,
            Fault::TrailingInput { start } => Diagnostic::TrailingInput {
                rest: text[start..].to_owned(),
            },
            Fault::Ident(flaw) => Diagnostic::InvalidIdent(
                flaw.reason(text, Term::Ident, term_name.unwrap_or(DEFAULT_TERM))
            ),
            Fault::Domain { start, flaw } => Diagnostic::InvalidDomain {
                domain: component(text, start).to_owned(),
                reason: flaw.reason(text, Term::Label, LABEL_TERM),
            },
            Fault::Subpath { start, flaw } => Diagnostic::InvalidSubpath {
                segment: component(text, start).to_owned(),
                reason: flaw.reason(text, Term::Ident, DEFAULT_TERM),
            },
        }
    }
}

impl Flaw {
    fn reason(self, text: &str, term: Term, subject: &str) -> Reason {
        let problem = match self {
            Flaw::Empty => Problem::Empty,
            Flaw::LeadingDigit => Problem::LeadingDigit,
            Flaw::LeadingDash => Problem::LeadingDash,
            Flaw::LeadingDot => Problem::LeadingDot,
            Flaw::Disallowed { start, stops } => Problem::Disallowed(
                collect_disallowed(run(text, start, stops), term)
            ),
        };

        Reason::new(subject, problem)
    }
}

impl Term {
    const fn allows(self, ch: char) -> bool {
        match self {
            Term::Label => is_label_tail(ch),
            Term::Ident => is_alnum(ch),
        }
    }
}

/// The text from `start` up to the next '/' or the end.
fn component(text: &str, start: usize) -> &str {
    let rest = &text[start..];
    rest.split_once('/').map_or(rest, |(head, _)| head)
}

fn run(text: &str, start: usize, stops: Stops) -> &str {
    let rest = &text[start..];
    rest.find(|ch: char| stops.contains(ch)).map_or(rest, |end| &rest[..end])
}

fn collect_disallowed(run: &str, term: Term) -> CharSet {
    let mut set = CharSet::default();

    for ch in run.chars().filter(|ch| !term.allows(*ch)) {
        set.insert(ch);
    }

    set
}
