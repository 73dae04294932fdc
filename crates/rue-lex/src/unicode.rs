//! Character classification helpers for the lexer.
//!
//! Identifiers are restricted to ASCII letters, digits, and underscore;
//! there is no XID_Start/XID_Continue handling here, unlike a
//! Unicode-aware identifier grammar.

pub fn is_ascii_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn is_ascii_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

pub fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        2 => matches!(c, '0' | '1'),
        8 => matches!(c, '0'..='7'),
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => false,
    }
}

/// An uppercase-only hex digit, per the string-escape rules: `\xHH` and
/// `\uHHHH`/`\u{...}` both require `[0-9A-F]`; a lowercase hex digit is a
/// lex error rather than being accepted.
pub fn is_upper_hex_digit(c: char) -> bool {
    matches!(c, '0'..='9' | 'A'..='F')
}

pub fn upper_hex_digit_to_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='F' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_start_excludes_digits_and_underscore() {
        assert!(is_ascii_ident_start('a'));
        assert!(is_ascii_ident_start('Z'));
        assert!(!is_ascii_ident_start('_'));
        assert!(!is_ascii_ident_start('1'));
    }

    #[test]
    fn ident_continue_allows_digits() {
        assert!(is_ascii_ident_continue('a'));
        assert!(is_ascii_ident_continue('1'));
        assert!(!is_ascii_ident_continue('_'));
        assert!(!is_ascii_ident_continue('-'));
    }

    #[test]
    fn upper_hex_rejects_lowercase() {
        assert!(is_upper_hex_digit('A'));
        assert!(is_upper_hex_digit('F'));
        assert!(is_upper_hex_digit('9'));
        assert!(!is_upper_hex_digit('a'));
        assert!(!is_upper_hex_digit('f'));
    }

    #[test]
    fn upper_hex_digit_value_matches_ascii_order() {
        assert_eq!(upper_hex_digit_to_value('0'), Some(0));
        assert_eq!(upper_hex_digit_to_value('9'), Some(9));
        assert_eq!(upper_hex_digit_to_value('A'), Some(10));
        assert_eq!(upper_hex_digit_to_value('F'), Some(15));
        assert_eq!(upper_hex_digit_to_value('a'), None);
    }

    #[test]
    fn digit_in_base_matches_all_four_bases() {
        assert!(is_digit_in_base('1', 2));
        assert!(!is_digit_in_base('2', 2));
        assert!(is_digit_in_base('7', 8));
        assert!(!is_digit_in_base('8', 8));
        assert!(is_digit_in_base('9', 10));
        assert!(is_digit_in_base('f', 16));
    }
}
