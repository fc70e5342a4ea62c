/// A scanning position over a bounded piece of text.
///
/// Positions are byte offsets into the full text, so faults raised while scanning can be turned
/// into diagnostics against the same text later on.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

/// The characters which end a term without being part of it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Stops {
    pub slash: bool,
    pub at: bool,
}

impl<'a> Cursor<'a> {
    pub const fn new(text: &'a str) -> Cursor<'a> {
        Cursor {
            text,
            pos: 0,
        }
    }

    pub const fn pos(&self) -> usize {
        self.pos
    }

    pub const fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    pub fn eat(&mut self, expected: char) -> bool {
        match self.peek() {
            Some(ch) if ch == expected => {
                self.pos += ch.len_utf8();
                true
            },
            _ => false,
        }
    }

    pub fn eat_while(&mut self, accept: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() && accept(ch) {
            self.pos += ch.len_utf8();
        }
    }
}

impl Stops {
    pub const fn contains(self, ch: char) -> bool {
        (self.slash && ch == '/') || (self.at && ch == '@')
    }
}
