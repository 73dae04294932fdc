//! Operator and punctuator lexing.
//!
//! Each method dispatches on its leading character and matches the
//! remaining characters via nested `match_char` calls, longest lexeme
//! first — exactly the priority order required by the grammar (`<<=`
//! before `<<` before `<`, and so on).

use rue_util::Diagnostic;

use super::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    pub(crate) fn lex_plus(&mut self) -> Result<Option<Token>, Diagnostic> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') { TokenKind::PlusAssign } else { TokenKind::Plus };
        Ok(Some(self.make_token(kind)))
    }

    pub(crate) fn lex_minus(&mut self) -> Result<Option<Token>, Diagnostic> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') { TokenKind::MinusAssign } else { TokenKind::Minus };
        Ok(Some(self.make_token(kind)))
    }

    pub(crate) fn lex_star(&mut self) -> Result<Option<Token>, Diagnostic> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') { TokenKind::StarAssign } else { TokenKind::Star };
        Ok(Some(self.make_token(kind)))
    }

    pub(crate) fn lex_slash(&mut self) -> Result<Option<Token>, Diagnostic> {
        // comments are stripped by `skip_whitespace_and_comments` before we
        // ever dispatch here, so a bare `/` can only be division.
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') { TokenKind::SlashAssign } else { TokenKind::Slash };
        Ok(Some(self.make_token(kind)))
    }

    pub(crate) fn lex_percent(&mut self) -> Result<Option<Token>, Diagnostic> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') { TokenKind::PercentAssign } else { TokenKind::Percent };
        Ok(Some(self.make_token(kind)))
    }

    pub(crate) fn lex_equals(&mut self) -> Result<Option<Token>, Diagnostic> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::Equal
        } else if self.cursor.match_char('>') {
            TokenKind::FatArrow
        } else {
            TokenKind::Assign
        };
        Ok(Some(self.make_token(kind)))
    }

    pub(crate) fn lex_bang(&mut self) -> Result<Option<Token>, Diagnostic> {
        let start = self.token_start;
        self.cursor.advance();
        if self.cursor.match_char('=') {
            Ok(Some(self.make_token(TokenKind::NotEqual)))
        } else {
            Err(Diagnostic::lex_with_content("Unexpected character", "!", start, start + 1))
        }
    }

    pub(crate) fn lex_less(&mut self) -> Result<Option<Token>, Diagnostic> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('<') {
            if self.cursor.match_char('=') { TokenKind::LeftShiftAssign } else { TokenKind::LeftShift }
        } else if self.cursor.match_char('=') {
            TokenKind::LessEqual
        } else {
            TokenKind::Less
        };
        Ok(Some(self.make_token(kind)))
    }

    pub(crate) fn lex_greater(&mut self) -> Result<Option<Token>, Diagnostic> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('>') {
            if self.cursor.match_char('>') {
                if self.cursor.match_char('=') { TokenKind::UnsignedRightShiftAssign } else { TokenKind::UnsignedRightShift }
            } else if self.cursor.match_char('=') {
                TokenKind::RightShiftAssign
            } else {
                TokenKind::RightShift
            }
        } else if self.cursor.match_char('=') {
            TokenKind::GreaterEqual
        } else {
            TokenKind::Greater
        };
        Ok(Some(self.make_token(kind)))
    }

    pub(crate) fn lex_ampersand(&mut self) -> Result<Option<Token>, Diagnostic> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') { TokenKind::AmpersandAssign } else { TokenKind::Ampersand };
        Ok(Some(self.make_token(kind)))
    }

    pub(crate) fn lex_pipe(&mut self) -> Result<Option<Token>, Diagnostic> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') { TokenKind::PipeAssign } else { TokenKind::Pipe };
        Ok(Some(self.make_token(kind)))
    }

    pub(crate) fn lex_caret(&mut self) -> Result<Option<Token>, Diagnostic> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') { TokenKind::CaretAssign } else { TokenKind::Caret };
        Ok(Some(self.make_token(kind)))
    }

    pub(crate) fn lex_question(&mut self) -> Result<Option<Token>, Diagnostic> {
        self.cursor.advance();
        let kind = if self.cursor.match_char(':') {
            TokenKind::Coalesce
        } else if self.cursor.match_char('.') {
            TokenKind::OptionalDot
        } else if self.cursor.match_char('=') {
            TokenKind::QuestionAssign
        } else {
            TokenKind::Question
        };
        Ok(Some(self.make_token(kind)))
    }

    pub(crate) fn lex_dot(&mut self) -> Result<Option<Token>, Diagnostic> {
        self.cursor.advance();
        let kind = if self.cursor.match_char('.') {
            if self.cursor.match_char('.') { TokenKind::Ellipsis } else { TokenKind::DotDot }
        } else {
            TokenKind::Dot
        };
        Ok(Some(self.make_token(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_one(source: &str) -> TokenKind {
        Lexer::new(source).next_token().unwrap().unwrap().kind
    }

    #[test]
    fn shift_family_longest_match() {
        assert_eq!(lex_one("<"), TokenKind::Less);
        assert_eq!(lex_one("<="), TokenKind::LessEqual);
        assert_eq!(lex_one("<<"), TokenKind::LeftShift);
        assert_eq!(lex_one("<<="), TokenKind::LeftShiftAssign);
    }

    #[test]
    fn unsigned_right_shift_family_longest_match() {
        assert_eq!(lex_one(">"), TokenKind::Greater);
        assert_eq!(lex_one(">="), TokenKind::GreaterEqual);
        assert_eq!(lex_one(">>"), TokenKind::RightShift);
        assert_eq!(lex_one(">>="), TokenKind::RightShiftAssign);
        assert_eq!(lex_one(">>>"), TokenKind::UnsignedRightShift);
        assert_eq!(lex_one(">>>="), TokenKind::UnsignedRightShiftAssign);
    }

    #[test]
    fn compound_assign_family() {
        assert_eq!(lex_one("+="), TokenKind::PlusAssign);
        assert_eq!(lex_one("-="), TokenKind::MinusAssign);
        assert_eq!(lex_one("*="), TokenKind::StarAssign);
        assert_eq!(lex_one("/="), TokenKind::SlashAssign);
        assert_eq!(lex_one("%="), TokenKind::PercentAssign);
        assert_eq!(lex_one("&="), TokenKind::AmpersandAssign);
        assert_eq!(lex_one("|="), TokenKind::PipeAssign);
        assert_eq!(lex_one("^="), TokenKind::CaretAssign);
        assert_eq!(lex_one("?="), TokenKind::QuestionAssign);
        assert_eq!(lex_one("=="), TokenKind::Equal);
        assert_eq!(lex_one("=>"), TokenKind::FatArrow);
        assert_eq!(lex_one("="), TokenKind::Assign);
    }

    #[test]
    fn not_equal_requires_equals_sign() {
        assert_eq!(lex_one("!="), TokenKind::NotEqual);
    }

    #[test]
    fn bare_bang_is_unexpected_character() {
        let err = Lexer::new("!").next_token().unwrap_err();
        assert_eq!(err.content.as_deref(), Some("!"));
    }

    #[test]
    fn question_family() {
        assert_eq!(lex_one("?"), TokenKind::Question);
        assert_eq!(lex_one("?:"), TokenKind::Coalesce);
        assert_eq!(lex_one("?."), TokenKind::OptionalDot);
        assert_eq!(lex_one("?="), TokenKind::QuestionAssign);
    }

    #[test]
    fn dot_family() {
        assert_eq!(lex_one("."), TokenKind::Dot);
        assert_eq!(lex_one(".."), TokenKind::DotDot);
        assert_eq!(lex_one("..."), TokenKind::Ellipsis);
    }

    #[test]
    fn bitwise_and_logical_symbols() {
        assert_eq!(lex_one("&"), TokenKind::Ampersand);
        assert_eq!(lex_one("|"), TokenKind::Pipe);
        assert_eq!(lex_one("^"), TokenKind::Caret);
        assert_eq!(lex_one("~"), TokenKind::Tilde);
    }
}
