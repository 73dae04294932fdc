//! The type grammar: union / intersection / postfix-decorated unary types.

use rue_lex::{Token, TokenKind};

use super::Parser;
use crate::cst::{Child, Tree, TreeKind};

const TYPE_BASE_KINDS: [TokenKind; 7] = [
    TokenKind::Identifier,
    TokenKind::IntegerType,
    TokenKind::UnsignedIntegerType,
    TokenKind::FloatType,
    TokenKind::BooleanType,
    TokenKind::StringType,
    TokenKind::VoidType,
];

impl<'a> Parser<'a> {
    pub(crate) fn parse_union_type(&mut self) -> Option<Tree> {
        self.parse_binary_level(TreeKind::UnionType, &[TokenKind::Pipe], Self::parse_intersection_type)
    }

    fn parse_intersection_type(&mut self) -> Option<Tree> {
        self.parse_binary_level(TreeKind::IntersectionType, &[TokenKind::Ampersand], Self::parse_unary_type)
    }

    pub(crate) fn parse_unary_type(&mut self) -> Option<Tree> {
        let start = self.cursor_offset();
        let base = self.parse_type_base()?;
        let mut children = vec![Self::leaf(base)];
        loop {
            if let Some(generic) = self.parse_generic_type() {
                children.push(Child::Tree(generic));
                continue;
            }
            if let Some(array) = self.parse_array_type() {
                children.push(Child::Tree(array));
                continue;
            }
            if self.at(TokenKind::Star) || self.at(TokenKind::Question) {
                children.push(Self::leaf(self.bump()));
                continue;
            }
            break;
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::UnaryType, start, stop, children))
    }

    fn parse_type_base(&mut self) -> Option<Token> {
        match self.peek_kind() {
            Some(kind) if TYPE_BASE_KINDS.contains(&kind) => Some(self.bump()),
            _ => {
                let (start, stop) = self.current_span();
                self.fail("Expected type", start, stop)
            }
        }
    }

    fn parse_generic_type(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::Less) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        match self.parse_union_type() {
            Some(t) => children.push(Child::Tree(t)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        while self.at(TokenKind::Comma) {
            children.push(Self::leaf(self.bump()));
            match self.parse_union_type() {
                Some(t) => children.push(Child::Tree(t)),
                None => {
                    self.discard(mark);
                    return None;
                }
            }
        }
        match self.expect(TokenKind::Greater, "Expected '>'") {
            Some(close) => children.push(Self::leaf(close)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::GenericType, start, stop, children))
    }

    fn parse_array_type(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::OpenBracket) {
            return None;
        }
        let open = self.bump();
        match self.expect(TokenKind::CloseBracket, "Expected ']'") {
            Some(close) => {
                let stop = self.cursor_offset();
                Some(Self::tree(TreeKind::ArrayType, start, stop, vec![Self::leaf(open), Self::leaf(close)]))
            }
            None => {
                self.discard(mark);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rue_lex::lex;

    use crate::parser::Parser;
    use crate::cst::{Tree, TreeKind};

    fn parse_unary_type(source: &str) -> Tree {
        let tokens = lex(source).unwrap();
        let mut parser = Parser::new(&tokens, source.len());
        parser.parse_unary_type().expect("type should parse")
    }

    #[test]
    fn plain_identifier_type() {
        let tree = parse_unary_type("Foo");
        assert_eq!(tree.kind, TreeKind::UnaryType);
        assert_eq!(tree.children.len(), 1);
    }

    #[test]
    fn array_suffix() {
        let tree = parse_unary_type("int[]");
        assert_eq!(tree.children.len(), 2);
    }

    #[test]
    fn generic_suffix() {
        let tree = parse_unary_type("List<int>");
        assert_eq!(tree.children.len(), 2);
    }

    #[test]
    fn nullable_and_pointer_suffixes_stack() {
        let tree = parse_unary_type("int*?");
        assert_eq!(tree.children.len(), 3);
    }
}
