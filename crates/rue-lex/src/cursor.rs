//! A byte-position cursor over the source text.
//!
//! Unlike a cursor that tracks line/column as it advances, this one only
//! tracks a byte offset: diagnostics carry byte spans and line/column are
//! derived later, at render time, by counting newlines (see
//! `rue_util::render_error`). This keeps every step of scanning a cheap,
//! branch-light byte walk.

pub struct Cursor<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor { source, position: 0 }
    }

    /// The character at `position + offset`, or `'\0'` past the end of
    /// source. `'\0'` is not a valid Rue source byte, so callers can treat
    /// it as a safe "nothing here" sentinel.
    pub fn char_at(&self, offset: usize) -> char {
        let mut index = self.position;
        for _ in 0..offset {
            match self.source[index..].chars().next() {
                Some(c) => index += c.len_utf8(),
                None => return '\0',
            }
        }
        self.source[index..].chars().next().unwrap_or('\0')
    }

    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
        }
    }

    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Resets the cursor to a previously observed position. Used for the
    /// single-step backtrack in float-exponent scanning.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    pub fn source(&self) -> &'a str {
        self.source
    }
}
