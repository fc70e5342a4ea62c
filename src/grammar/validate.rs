use crate::error::Diagnostic;
use crate::grammar::parse::{parse_domain, parse_ident, parse_path, parse_subpath};
use crate::grammar::{Cursor, Fault};

/// Runs `parse` over the whole of `text`. A parse that stops short of the end is a failure.
pub(super) fn check(text: &str, parse: impl FnOnce(&mut Cursor<'_>) -> Result<(), Fault>) -> Result<(), Fault> {
    let mut cursor = Cursor::new(text);
    parse(&mut cursor)?;

    match cursor.at_end() {
        true => Ok(()),
        false => Err(Fault::TrailingInput { start: cursor.pos() }),
    }
}

fn domain(cursor: &mut Cursor<'_>) -> Result<(), Fault> {
    parse_domain(cursor, false)
}

fn ident(cursor: &mut Cursor<'_>) -> Result<(), Fault> {
    parse_ident(cursor, false).map_err(Fault::Ident)
}

/// Checks that `text` is a complete path: `/domain[@label][/ident[/ident...]]`.
///
/// # Errors
/// Returns a [`Diagnostic`] describing the outermost violation.
pub fn is_valid_full_path(text: &str) -> Result<(), Diagnostic> {
    check(text, parse_path).map_err(|fault| fault.diagnose(text, None))
}

/// Checks that `text` is a domain on its own, without the leading slash.
///
/// # Errors
/// Returns a [`Diagnostic`] describing the outermost violation.
pub fn is_valid_domain(text: &str) -> Result<(), Diagnostic> {
    check(text, domain).map_err(|fault| fault.diagnose(text, None))
}

/// Checks that `text` is a slash-separated sequence of identifiers.
///
/// # Errors
/// Returns a [`Diagnostic`] describing the outermost violation.
pub fn is_valid_subpath(text: &str) -> Result<(), Diagnostic> {
    check(text, parse_subpath).map_err(|fault| fault.diagnose(text, None))
}

/// Checks that `text` is a single identifier. `term_name` names the thing being validated in the
/// diagnostic and defaults to "identifier".
///
/// # Errors
/// Returns a [`Diagnostic::InvalidIdent`] explaining the violation.
pub fn is_valid_ident(text: &str, term_name: Option<&str>) -> Result<(), Diagnostic> {
    check(text, ident).map_err(|fault| fault.diagnose(text, term_name))
}

/// Like [`is_valid_full_path`], without building a diagnostic.
pub fn is_full_path(text: &str) -> bool {
    check(text, parse_path).is_ok()
}

pub fn is_domain(text: &str) -> bool {
    check(text, domain).is_ok()
}

pub fn is_subpath(text: &str) -> bool {
    check(text, parse_subpath).is_ok()
}

pub fn is_ident(text: &str) -> bool {
    check(text, ident).is_ok()
}
