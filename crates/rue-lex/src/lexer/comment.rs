//! Whitespace and comment skipping.

use rue_util::Diagnostic;

use super::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace, line comments, and block comments, in any mix,
    /// until the cursor sits on the first byte of the next token (or EOF).
    pub(crate) fn skip_whitespace_and_comments(&mut self) -> Result<(), Diagnostic> {
        if !self.bom_checked {
            self.bom_checked = true;
            if self.cursor.remaining().starts_with('\u{FEFF}') {
                self.cursor.advance();
            }
        }

        loop {
            if self.cursor.is_at_end() {
                return Ok(());
            }

            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' | '\u{0B}' | '\u{0C}' => {
                    self.cursor.advance();
                }
                '/' if self.cursor.peek_char(1) == '/' => self.skip_line_comment(),
                '/' if self.cursor.peek_char(1) == '*' => self.skip_block_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }

    /// Skips a block comment. Nesting is not supported: the first `*/`
    /// after the opening `/*` closes it.
    fn skip_block_comment(&mut self) -> Result<(), Diagnostic> {
        let start = self.cursor.position();
        self.cursor.advance();
        self.cursor.advance();

        loop {
            if self.cursor.is_at_end() {
                return Err(self.error_at("Unterminated block comment", start, self.cursor.position()));
            }
            if self.cursor.current_char() == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                return Ok(());
            }
            self.cursor.advance();
        }
    }
}
