//! Identifier and keyword lexing.
//!
//! Identifiers match `[A-Za-z](?:_?[A-Za-z0-9]+)*`: a single letter,
//! followed by zero or more runs of an optional underscore and at least one
//! alphanumeric. A trailing underscore with nothing after it is not part of
//! the identifier — it is left for the next token to pick up.

use rue_util::Diagnostic;

use super::Lexer;
use crate::keywords;
use crate::token::{Token, TokenKind};
use crate::unicode::is_ascii_ident_continue;

impl<'a> Lexer<'a> {
    pub(crate) fn lex_identifier(&mut self) -> Result<Option<Token>, Diagnostic> {
        self.cursor.advance(); // the leading letter

        loop {
            let checkpoint = self.cursor.position();
            let had_underscore = self.cursor.match_char('_');

            let mut run = 0usize;
            while is_ascii_ident_continue(self.cursor.current_char()) {
                self.cursor.advance();
                run += 1;
            }

            if run == 0 {
                if had_underscore {
                    self.cursor.set_position(checkpoint);
                }
                break;
            }
        }

        let text = self.cursor.slice_from(self.token_start);
        let kind = keywords::lookup(text).unwrap_or(TokenKind::Identifier);
        Ok(Some(self.make_token(kind)))
    }
}
