//! The Rue parser: turns a token sequence into a concrete syntax tree, or
//! the furthest diagnostic reached while backtracking through the grammar.

mod cst;
mod parser;
mod stringify;

pub use cst::{Child, Tree, TreeKind};
pub use stringify::{stringify, Stringifiable};

use rue_lex::Token;
use rue_util::ParseError;

use parser::Parser;

/// Parses a full token sequence into a `Body` tree. `source` is needed only
/// to compute the end-of-input offset for diagnostics and empty trees.
pub fn parse(tokens: Vec<Token>, source: &str) -> Result<Tree, ParseError> {
    let parser = Parser::new(&tokens, source.len());
    parser.parse()
}

#[cfg(test)]
mod tests {
    use rue_lex::lex;

    use super::*;
    use crate::cst::TreeKind;

    fn parse_source(source: &str) -> Tree {
        let tokens = lex(source).unwrap();
        parse(tokens, source).unwrap()
    }

    #[test]
    fn end_to_end_field_declaration() {
        let body = parse_source("val x = 5;");
        assert_eq!(body.kind, TreeKind::Body);
        assert_eq!(body.children.len(), 1);
    }

    #[test]
    fn end_to_end_if_else_with_compound_assign() {
        let body = parse_source("if (a > 0) { x += 1; } else { x -= 1; }");
        assert_eq!(body.kind, TreeKind::Body);
        assert_eq!(body.children.len(), 1);
    }

    #[test]
    fn end_to_end_function_definition() {
        let body = parse_source("def f(a: int, b: int): int { return a + b; }");
        assert_eq!(body.kind, TreeKind::Body);
        assert_eq!(body.children.len(), 1);
    }

    #[test]
    fn end_to_end_match_with_fallback_body() {
        let body = parse_source("match (n) { 1 => a; 2 => b; c; }");
        assert_eq!(body.kind, TreeKind::Body);
        assert_eq!(body.children.len(), 1);
    }

    #[test]
    fn unexpected_leftover_token_after_body_is_an_error() {
        // The stray `)` can't start any statement alternative, so the
        // furthest error recorded while trying to parse one (from the
        // expression-statement attempt) is what's reported, not a generic
        // message at the leftover token.
        let tokens = lex("val x = 1; )").unwrap();
        let source = "val x = 1; )";
        let err = parse(tokens, source).unwrap_err();
        let paren_offset = source.rfind(')').unwrap();
        assert_eq!(err.message, "Expected expression");
        assert_eq!(err.start, paren_offset);
    }

    #[test]
    fn error_locality_points_at_or_after_the_assign_operator() {
        let tokens = lex("val x = ;").unwrap();
        let err = parse(tokens, "val x = ;").unwrap_err();
        let equals_offset = "val x = ;".find('=').unwrap();
        assert!(err.start >= equals_offset);
    }

    #[test]
    fn empty_source_parses_to_an_empty_body() {
        let body = parse_source("");
        assert_eq!(body.children.len(), 0);
    }
}
