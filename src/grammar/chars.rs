//! Character classes of the path grammar. Only ASCII characters ever match.

/// `'A'-'Z' | 'a'-'z' | '_'`, the head of an identifier.
pub const fn is_alpha(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// `Alpha | '0'-'9'`, the head of a domain label and the tail of an identifier.
pub const fn is_alnum(ch: char) -> bool {
    is_alpha(ch) || ch.is_ascii_digit()
}

/// `AlphaNum | '-' | '.'`
pub const fn is_label_tail(ch: char) -> bool {
    is_alnum(ch) || ch == '-' || ch == '.'
}
