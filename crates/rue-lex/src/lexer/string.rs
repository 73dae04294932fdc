//! String (and character) literal lexing.
//!
//! Both `'...'` and `"..."` close on their own opening quote and decode to
//! the same `StringLiteral` kind — there is no separate character-literal
//! token kind. The emitted token's `text` is the decoded content, with the
//! surrounding quotes stripped.

use rue_util::Diagnostic;

use super::Lexer;
use crate::token::{Token, TokenKind};
use crate::unicode::{is_upper_hex_digit, upper_hex_digit_to_value};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_string(&mut self) -> Result<Option<Token>, Diagnostic> {
        let quote = self.cursor.current_char();
        self.cursor.advance();

        let mut content = String::new();
        loop {
            if self.cursor.is_at_end() {
                return Err(self.error("Unterminated string literal"));
            }
            let c = self.cursor.current_char();
            if c == quote {
                self.cursor.advance();
                break;
            }
            if c == '\n' {
                return Err(self.error("Unterminated string literal"));
            }
            if c == '\\' {
                let escape_start = self.cursor.position();
                self.cursor.advance();
                content.push(self.decode_escape(escape_start)?);
            } else {
                content.push(c);
                self.cursor.advance();
            }
        }

        let start = self.token_start;
        let stop = self.cursor.position();
        Ok(Some(Token::new(TokenKind::StringLiteral, content, start, stop)))
    }

    /// Decodes one escape sequence. `escape_start` is the byte offset of
    /// the backslash, used for precise error spans.
    fn decode_escape(&mut self, escape_start: usize) -> Result<char, Diagnostic> {
        if self.cursor.is_at_end() {
            return Err(self.error_at("Unterminated escape sequence", escape_start, self.cursor.position()));
        }

        let c = self.cursor.current_char();
        self.cursor.advance();

        match c {
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            'f' => Ok('\u{0C}'),
            'v' => Ok('\u{0B}'),
            't' => Ok('\t'),
            'b' => Ok('\u{08}'),
            '0' => Ok('\0'),
            'x' => self.decode_hex_byte_escape(escape_start),
            'u' => self.decode_unicode_escape(escape_start),
            other => Ok(other),
        }
    }

    fn decode_hex_byte_escape(&mut self, escape_start: usize) -> Result<char, Diagnostic> {
        let d1 = self.cursor.current_char();
        if !is_upper_hex_digit(d1) {
            return Err(self.error_at(
                "Invalid or lowercase hexadecimal escape sequence",
                escape_start,
                self.cursor.position() + 1,
            ));
        }
        self.cursor.advance();

        let d2 = self.cursor.current_char();
        if !is_upper_hex_digit(d2) {
            return Err(self.error_at(
                "Invalid or lowercase hexadecimal escape sequence",
                escape_start,
                self.cursor.position() + 1,
            ));
        }
        self.cursor.advance();

        let value = upper_hex_digit_to_value(d1).unwrap() * 16 + upper_hex_digit_to_value(d2).unwrap();
        Ok(value as u8 as char)
    }

    fn decode_unicode_escape(&mut self, escape_start: usize) -> Result<char, Diagnostic> {
        if self.cursor.match_char('{') {
            let mut value: u32 = 0;
            let mut digits = 0usize;
            loop {
                if self.cursor.current_char() == '}' {
                    self.cursor.advance();
                    break;
                }
                if self.cursor.is_at_end() || self.cursor.current_char() == '\n' {
                    return Err(self.error_at("Unterminated escape sequence", escape_start, self.cursor.position()));
                }
                let d = self.cursor.current_char();
                if !is_upper_hex_digit(d) {
                    return Err(self.error_at(
                        "Invalid or lowercase hexadecimal escape sequence",
                        escape_start,
                        self.cursor.position() + 1,
                    ));
                }
                value = value.saturating_mul(16).saturating_add(upper_hex_digit_to_value(d).unwrap());
                self.cursor.advance();
                digits += 1;
            }
            if digits == 0 {
                return Err(self.error_at(
                    "Invalid or lowercase hexadecimal escape sequence",
                    escape_start,
                    self.cursor.position(),
                ));
            }
            if value > 0x10FFFF {
                return Err(self.error_at("Out of range", escape_start, self.cursor.position()));
            }
            char::from_u32(value).ok_or_else(|| self.error_at("Out of range", escape_start, self.cursor.position()))
        } else {
            let mut value: u32 = 0;
            for _ in 0..4 {
                let d = self.cursor.current_char();
                if !is_upper_hex_digit(d) {
                    return Err(self.error_at(
                        "Invalid or lowercase hexadecimal escape sequence",
                        escape_start,
                        self.cursor.position() + 1,
                    ));
                }
                value = value * 16 + upper_hex_digit_to_value(d).unwrap();
                self.cursor.advance();
            }
            char::from_u32(value).ok_or_else(|| self.error_at("Out of range", escape_start, self.cursor.position()))
        }
    }
}
