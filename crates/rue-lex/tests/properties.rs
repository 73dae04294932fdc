//! End-to-end lexer properties that don't belong inside any single
//! submodule's unit tests.

use rue_lex::{lex, TokenKind};

#[test]
fn token_spans_reconstruct_source_except_for_decoded_strings() {
    let source = r#"val greeting = "hi\n\x41"; val n = 0xFF + 1;"#;
    let tokens = lex(source).unwrap();
    for token in &tokens {
        if token.kind != TokenKind::StringLiteral {
            assert_eq!(&source[token.start..token.stop], token.text);
        }
    }
}

#[test]
fn tokens_are_ordered_and_non_overlapping() {
    let source = "def f(a: int): int { return a * 2; }";
    let tokens = lex(source).unwrap();
    for pair in tokens.windows(2) {
        assert!(pair[0].stop <= pair[1].start);
        assert!(pair[0].start < pair[0].stop);
    }
}

#[test]
fn operator_longest_match_across_the_whole_table() {
    let tokens = lex(">>>= << .. ...").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::UnsignedRightShiftAssign,
            TokenKind::LeftShift,
            TokenKind::DotDot,
            TokenKind::Ellipsis,
        ]
    );
}

#[test]
fn combined_escape_decoding_scenario() {
    let tokens = lex(r#""hi\n\x41""#).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].text, "hi\nA");
}

#[test]
fn unterminated_string_reports_the_documented_message() {
    let err = lex("\"never closed").unwrap_err();
    assert_eq!(err.message, "Unterminated string literal");
}

#[test]
fn out_of_range_unicode_escape_reports_the_documented_message() {
    let err = lex(r#""\u{110000}""#).unwrap_err();
    assert_eq!(err.message, "Out of range");
}
