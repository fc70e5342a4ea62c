use crate::grammar::chars::{is_alnum, is_alpha, is_label_tail};
use crate::grammar::{Cursor, Fault, Flaw, Stops};

/// Consumes one domain label: `AlphaNum ( AlphaNum | '-' | '.' )*`.
///
/// The label has to end at the end of the text or at one of `stops`, which is left unconsumed.
pub(crate) fn parse_domain_label(cursor: &mut Cursor<'_>, stops: Stops) -> Result<(), Flaw> {
    let start = cursor.pos();

    match cursor.peek() {
        None => Err(Flaw::Empty)?,
        Some(ch) if stops.contains(ch) => Err(Flaw::Empty)?,
        Some('-') => Err(Flaw::LeadingDash)?,
        Some('.') => Err(Flaw::LeadingDot)?,
        Some(ch) if !is_alnum(ch) => Err(Flaw::Disallowed { start, stops })?,
        Some(_) => cursor.bump(),
    };

    cursor.eat_while(is_label_tail);
    finish_term(cursor, start, stops)
}

/// Consumes `Label ( '@' Label )?`. The first label always stops at '@', the second never does.
pub(crate) fn parse_domain(cursor: &mut Cursor<'_>, stop_on_slash: bool) -> Result<(), Fault> {
    let start = cursor.pos();
    let wrap = |flaw| Fault::Domain { start, flaw };

    parse_domain_label(cursor, Stops { slash: stop_on_slash, at: true }).map_err(wrap)?;

    if cursor.eat('@') {
        parse_domain_label(cursor, Stops { slash: stop_on_slash, at: false }).map_err(wrap)?;
    }

    Ok(())
}

/// Consumes one identifier: `Alpha AlphaNum*`.
pub(crate) fn parse_ident(cursor: &mut Cursor<'_>, stop_on_slash: bool) -> Result<(), Flaw> {
    let start = cursor.pos();
    let stops = Stops { slash: stop_on_slash, at: false };

    match cursor.peek() {
        None => Err(Flaw::Empty)?,
        Some(ch) if stops.contains(ch) => Err(Flaw::Empty)?,
        Some(ch) if ch.is_ascii_digit() => Err(Flaw::LeadingDigit)?,
        Some(ch) if !is_alpha(ch) => Err(Flaw::Disallowed { start, stops })?,
        Some(_) => cursor.bump(),
    };

    cursor.eat_while(is_alnum);
    finish_term(cursor, start, stops)
}

/// Consumes `Ident ( '/' Ident )*`.
///
/// An identifier which fails before consuming anything is reported as a slash problem rather than
/// an identifier problem: at the end it's a trailing slash, in front of a '/' it's a doubled one.
/// Only an entirely empty subpath falls through to the identifier's own message.
pub(crate) fn parse_subpath(cursor: &mut Cursor<'_>) -> Result<(), Fault> {
    loop {
        let start = cursor.pos();

        if let Err(flaw) = parse_ident(cursor, true) {
            Err(match cursor.peek() {
                None if flaw.is_empty() && start > 0 => Fault::TrailingSlash,
                Some('/') if flaw.is_empty() => Fault::ConsecutiveSlashes,
                _ => Fault::Subpath { start, flaw },
            })?
        }

        if !cursor.eat('/') {
            return Ok(());
        }
    }
}

/// Consumes `'/' Domain ( '/' Subpath )?`.
pub(crate) fn parse_path(cursor: &mut Cursor<'_>) -> Result<(), Fault> {
    if !cursor.eat('/') {
        Err(Fault::NoLeadingSlash)?
    }

    parse_domain(cursor, true)?;

    if cursor.eat('/') {
        parse_subpath(cursor)?;
    }

    Ok(())
}

fn finish_term(cursor: &Cursor<'_>, start: usize, stops: Stops) -> Result<(), Flaw> {
    match cursor.peek() {
        Some(ch) if !stops.contains(ch) => Err(Flaw::Disallowed { start, stops }),
        _ => Ok(()),
    }
}
