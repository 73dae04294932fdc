//! Tokenizer for Rue source text.
//!
//! [`lex`] is the entry point: it runs the [`Lexer`] to exhaustion and
//! returns either the full token stream or the first [`rue_util::Diagnostic`]
//! encountered. Lexing is all-or-nothing — there is no partial result on
//! failure.

mod cursor;
mod keywords;
mod lexer;
mod token;
mod unicode;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

use rue_util::LexError;

/// Tokenizes `source` in full, stopping at the first error.
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexes_a_small_program() {
        let tokens = lex("val x = 1 + 2;").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Val,
                TokenKind::Identifier,
                TokenKind::Assign,
                TokenKind::IntLiteral,
                TokenKind::Plus,
                TokenKind::IntLiteral,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn stops_at_the_first_error() {
        let err = lex("val x = 1 $ 2;").unwrap_err();
        assert_eq!(err.message, "Unexpected character");
    }

    #[test]
    fn token_spans_reconstruct_their_own_source_slice() {
        let source = "val count = 10;";
        let tokens = lex(source).unwrap();
        for token in &tokens {
            if token.kind != TokenKind::StringLiteral {
                assert_eq!(&source[token.start..token.stop], token.text);
            }
        }
    }
}
