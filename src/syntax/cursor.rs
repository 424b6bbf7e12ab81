//! Byte cursor with running line/column tracking.
//!
//! Input is treated as a sequence of single-byte characters and is never
//! transcoded. Lines break on `\n`; the column restarts at 1 after each one.

use crate::errors::Location;

/// A saved cursor state. Restoring one is how rules backtrack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }
}

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a [u8],
    position: Position,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a [u8]) -> Self {
        Self {
            src,
            position: Position::start(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn restore(&mut self, position: Position) {
        self.position = position;
    }

    pub fn is_eof(&self) -> bool {
        self.position.offset >= self.src.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    pub fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.src.get(self.position.offset + ahead).copied()
    }

    /// The unconsumed input.
    pub fn rest(&self) -> &'a [u8] {
        self.src.get(self.position.offset..).unwrap_or_default()
    }

    pub fn starts_with(&self, text: &str) -> bool {
        self.rest().starts_with(text.as_bytes())
    }

    pub fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.position.offset += 1;
        if byte == b'\n' {
            self.position.line += 1;
            self.position.column = 1;
        } else {
            self.position.column += 1;
        }
        Some(byte)
    }

    /// Consume `text` if the input continues with it.
    pub fn eat(&mut self, text: &str) -> bool {
        if !self.starts_with(text) {
            return false;
        }
        for _ in 0..text.len() {
            self.bump();
        }
        true
    }

    pub fn eat_while(&mut self, mut pred: impl FnMut(u8) -> bool) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(&mut pred) {
            self.bump();
            count += 1;
        }
        count
    }

    /// Advance to just past the next occurrence of `terminator`. Leaves the
    /// cursor untouched and returns `false` when it never occurs.
    pub fn skip_past(&mut self, terminator: &str) -> bool {
        let Some(found) = find(self.rest(), terminator.as_bytes()) else {
            return false;
        };
        for _ in 0..found + terminator.len() {
            self.bump();
        }
        true
    }

    /// Bytes consumed since `start`.
    pub fn slice_from(&self, start: Position) -> &'a [u8] {
        self.src
            .get(start.offset..self.position.offset)
            .unwrap_or_default()
    }

    /// Text consumed since `start`, see [`decode`].
    pub fn text_from(&self, start: Position) -> String {
        decode(self.slice_from(start))
    }
}

/// Turn token bytes into text. UTF-8 is kept as is; any other byte sequence
/// is read one byte per character (ISO 8859-1), so no byte is lost or
/// replaced.
pub fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| char::from(b)).collect(),
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
