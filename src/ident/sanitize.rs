use std::fmt::Display;

use derive_more::IsVariant;
use tracing::trace;

use crate::grammar::chars::is_alnum;

/// The last thing pushed to the identifier being built.
#[derive(Debug, Clone, Copy, IsVariant)]
enum Emitted {
    Nothing,
    Char,
    Underscore,
    Space,
}

/// Builds a valid identifier out of arbitrary text in a single pass.
///
/// Letters, digits and underscores are kept, a run of whitespace becomes one '_' and everything
/// else is dropped. A leading digit gets a '_' in front of it. Text with nothing usable in it
/// produces `"_"`.
///
/// Valid identifiers are returned unchanged.
pub fn make_valid_identifier(value: &str) -> String {
    let mut last = Emitted::Nothing;
    let mut ident = String::with_capacity(value.len() + 1);

    for ch in value.chars() {
        match (ch, last) {
            (ch, Emitted::Nothing) if ch.is_ascii_digit() => {
                ident.push('_');
                ident.push(ch);
                last = Emitted::Char;
            },
            ('_', _) => {
                ident.push('_');
                last = Emitted::Underscore;
            },
            (ch, _) if is_alnum(ch) => {
                ident.push(ch);
                last = Emitted::Char;
            },
            (ch, Emitted::Char) if ch.is_whitespace() => {
                ident.push('_');
                last = Emitted::Space;
            },
            _ => (),
        }
    }

    if last.is_nothing() {
        ident.push('_');
    } else if last.is_space() && ident.len() > 1 {
        ident.pop();
    }

    if ident != value {
        trace!(input = value, output = ident.as_str(), "sanitized identifier");
    }

    ident
}

/// Turns an opaque token, such as a GUID, into an identifier.
pub fn identifier_from_token<T: Display>(token: T) -> String {
    make_valid_identifier(&token.to_string())
}

/// Turns a [`Uuid`](uuid::Uuid) into an identifier, using its hyphen-free form.
#[cfg(feature = "uuid")]
pub fn identifier_from_uuid(uuid: &uuid::Uuid) -> String {
    identifier_from_token(uuid.simple())
}
