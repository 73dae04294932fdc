//! Numeric literal lexing.
//!
//! Only the lexeme shape is recognized here — no value parsing, overflow
//! checking, or underscore digit separators (the grammar's literal regexes
//! don't have them). A downstream stage that needs the numeric value reads
//! `token.text` itself.

use rue_util::Diagnostic;

use super::Lexer;
use crate::token::{Token, TokenKind};
use crate::unicode::is_digit_in_base;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_number(&mut self) -> Result<Option<Token>, Diagnostic> {
        if self.cursor.current_char() == '0' {
            match self.cursor.peek_char(1) {
                'x' | 'X' if is_digit_in_base(self.cursor.peek_char(2), 16) => {
                    self.cursor.advance();
                    self.cursor.advance();
                    self.consume_digit_run(16);
                    return Ok(Some(self.make_token(TokenKind::HexadecimalLiteral)));
                }
                'o' | 'O' if is_digit_in_base(self.cursor.peek_char(2), 8) => {
                    self.cursor.advance();
                    self.cursor.advance();
                    self.consume_digit_run(8);
                    return Ok(Some(self.make_token(TokenKind::OctalLiteral)));
                }
                'b' | 'B' if is_digit_in_base(self.cursor.peek_char(2), 2) => {
                    self.cursor.advance();
                    self.cursor.advance();
                    self.consume_digit_run(2);
                    return Ok(Some(self.make_token(TokenKind::BinaryLiteral)));
                }
                _ => {}
            }
        }

        self.consume_digit_run(10);

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.consume_digit_run(10);
            self.consume_optional_exponent();
            return Ok(Some(self.make_token(TokenKind::FloatLiteral)));
        }

        self.consume_optional_exponent();
        Ok(Some(self.make_token(TokenKind::IntLiteral)))
    }

    fn consume_digit_run(&mut self, base: u32) {
        while is_digit_in_base(self.cursor.current_char(), base) {
            self.cursor.advance();
        }
    }

    /// `(?:[eE][+\-]?[0-9]+)?` — an exponent with no digits after it isn't
    /// an exponent at all, so the attempt backtracks.
    fn consume_optional_exponent(&mut self) {
        if self.cursor.current_char() != 'e' && self.cursor.current_char() != 'E' {
            return;
        }
        let checkpoint = self.cursor.position();
        self.cursor.advance();
        if self.cursor.current_char() == '+' || self.cursor.current_char() == '-' {
            self.cursor.advance();
        }
        if self.cursor.current_char().is_ascii_digit() {
            self.consume_digit_run(10);
        } else {
            self.cursor.set_position(checkpoint);
        }
    }
}
