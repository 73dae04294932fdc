//! The 13-tier operator-precedence expression grammar, one recursive
//! function per tier, from loosest (`ExpressionSequence`) to tightest
//! (`Reference`).

use rue_lex::{Token, TokenKind};

use super::Parser;
use crate::cst::{Child, Tree, TreeKind};

const ASSIGN_OPS: [TokenKind; 13] = [
    TokenKind::Assign,
    TokenKind::PlusAssign,
    TokenKind::MinusAssign,
    TokenKind::StarAssign,
    TokenKind::SlashAssign,
    TokenKind::PercentAssign,
    TokenKind::AmpersandAssign,
    TokenKind::PipeAssign,
    TokenKind::CaretAssign,
    TokenKind::QuestionAssign,
    TokenKind::LeftShiftAssign,
    TokenKind::RightShiftAssign,
    TokenKind::UnsignedRightShiftAssign,
];

const UNARY_PREFIX_OPS: [TokenKind; 6] =
    [TokenKind::Not, TokenKind::Tilde, TokenKind::Plus, TokenKind::Minus, TokenKind::Star, TokenKind::Ampersand];

const SIMPLE_LITERAL_KINDS: [TokenKind; 11] = [
    TokenKind::Identifier,
    TokenKind::StringLiteral,
    TokenKind::IntLiteral,
    TokenKind::FloatLiteral,
    TokenKind::BinaryLiteral,
    TokenKind::OctalLiteral,
    TokenKind::HexadecimalLiteral,
    TokenKind::BoolLiteral,
    TokenKind::Null,
    TokenKind::This,
    TokenKind::Super,
];

impl<'a> Parser<'a> {
    pub(crate) fn parse_expression_sequence(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        let first = self.parse_assignment_expression()?;
        let mut children = vec![Child::Tree(first)];
        while self.at(TokenKind::Comma) {
            children.push(Self::leaf(self.bump()));
            match self.parse_assignment_expression() {
                Some(t) => children.push(Child::Tree(t)),
                None => {
                    self.discard(mark);
                    return None;
                }
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::ExpressionSequence, start, stop, children))
    }

    /// Admits exactly one assignment operator; the right-hand side is a
    /// `TernaryExpression`, not another `AssignmentExpression`, so `a = b =
    /// c` is rejected here rather than parsed as a chain.
    pub(crate) fn parse_assignment_expression(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        let first = self.parse_ternary_expression()?;
        let mut children = vec![Child::Tree(first)];
        if matches!(self.peek_kind(), Some(k) if ASSIGN_OPS.contains(&k)) {
            children.push(Self::leaf(self.bump()));
            match self.parse_ternary_expression() {
                Some(t) => children.push(Child::Tree(t)),
                None => {
                    self.discard(mark);
                    return None;
                }
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Assignment, start, stop, children))
    }

    fn parse_ternary_expression(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        let cond = self.parse_coalesce_expression()?;
        let mut children = vec![Child::Tree(cond)];
        if self.at(TokenKind::Question) {
            children.push(Self::leaf(self.bump()));
            match self.parse_assignment_expression() {
                Some(t) => children.push(Child::Tree(t)),
                None => {
                    self.discard(mark);
                    return None;
                }
            }
            match self.expect(TokenKind::Colon, "Expected ':'") {
                Some(colon) => children.push(Self::leaf(colon)),
                None => {
                    self.discard(mark);
                    return None;
                }
            }
            match self.parse_assignment_expression() {
                Some(t) => children.push(Child::Tree(t)),
                None => {
                    self.discard(mark);
                    return None;
                }
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Ternary, start, stop, children))
    }

    fn parse_coalesce_expression(&mut self) -> Option<Tree> {
        self.parse_binary_level(TreeKind::Coalesce, &[TokenKind::Coalesce], Self::parse_logical_or)
    }

    fn parse_logical_or(&mut self) -> Option<Tree> {
        self.parse_binary_level(TreeKind::LogicalOr, &[TokenKind::Or], Self::parse_logical_and)
    }

    fn parse_logical_and(&mut self) -> Option<Tree> {
        self.parse_binary_level(TreeKind::LogicalAnd, &[TokenKind::And], Self::parse_bitwise_or)
    }

    fn parse_bitwise_or(&mut self) -> Option<Tree> {
        self.parse_binary_level(TreeKind::BitwiseOr, &[TokenKind::Pipe], Self::parse_bitwise_xor)
    }

    fn parse_bitwise_xor(&mut self) -> Option<Tree> {
        self.parse_binary_level(TreeKind::BitwiseXor, &[TokenKind::Caret], Self::parse_bitwise_and)
    }

    fn parse_bitwise_and(&mut self) -> Option<Tree> {
        self.parse_binary_level(TreeKind::BitwiseAnd, &[TokenKind::Ampersand], Self::parse_equality)
    }

    fn parse_equality(&mut self) -> Option<Tree> {
        self.parse_binary_level(TreeKind::Equality, &[TokenKind::Equal, TokenKind::NotEqual], Self::parse_comparison)
    }

    /// Unlike the other tiers, `Comparison` has two distinct operator
    /// groups whose right-hand side productions differ: the relational
    /// group descends to `Shift`, while `as`/`is` take a `UnaryType`.
    fn parse_comparison(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        let first = self.parse_shift()?;
        let mut children = vec![Child::Tree(first)];
        loop {
            match self.peek_kind() {
                Some(TokenKind::LessEqual)
                | Some(TokenKind::GreaterEqual)
                | Some(TokenKind::Less)
                | Some(TokenKind::Greater)
                | Some(TokenKind::In) => {
                    children.push(Self::leaf(self.bump()));
                    match self.parse_shift() {
                        Some(t) => children.push(Child::Tree(t)),
                        None => {
                            self.discard(mark);
                            return None;
                        }
                    }
                }
                Some(TokenKind::As) | Some(TokenKind::Is) => {
                    children.push(Self::leaf(self.bump()));
                    match self.parse_unary_type() {
                        Some(t) => children.push(Child::Tree(t)),
                        None => {
                            self.discard(mark);
                            return None;
                        }
                    }
                }
                _ => break,
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Comparison, start, stop, children))
    }

    fn parse_shift(&mut self) -> Option<Tree> {
        self.parse_binary_level(
            TreeKind::Shift,
            &[TokenKind::LeftShift, TokenKind::RightShift, TokenKind::UnsignedRightShift],
            Self::parse_term,
        )
    }

    fn parse_term(&mut self) -> Option<Tree> {
        self.parse_binary_level(TreeKind::Term, &[TokenKind::Plus, TokenKind::Minus], Self::parse_factor)
    }

    fn parse_factor(&mut self) -> Option<Tree> {
        self.parse_binary_level(
            TreeKind::Factor,
            &[TokenKind::Star, TokenKind::Slash, TokenKind::Percent],
            Self::parse_range,
        )
    }

    /// `Unary? (('..'|'...') Unary?)?` — at least one of the left operand,
    /// the operator, or the right operand must be present.
    fn parse_range(&mut self) -> Option<Tree> {
        let start = self.cursor_offset();
        let mut children = Vec::new();

        let left_mark = self.push();
        match self.parse_unary() {
            Some(t) => children.push(Child::Tree(t)),
            None => self.discard(left_mark),
        }

        if matches!(self.peek_kind(), Some(TokenKind::DotDot) | Some(TokenKind::Ellipsis)) {
            children.push(Self::leaf(self.bump()));
            let right_mark = self.push();
            match self.parse_unary() {
                Some(t) => children.push(Child::Tree(t)),
                None => self.discard(right_mark),
            }
        }

        if children.is_empty() {
            let (s, e) = self.current_span();
            return self.fail("Expected expression", s, e);
        }

        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Range, start, stop, children))
    }

    fn parse_unary(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        let mut children = Vec::new();
        while matches!(self.peek_kind(), Some(k) if UNARY_PREFIX_OPS.contains(&k)) {
            children.push(Self::leaf(self.bump()));
        }
        match self.parse_reference() {
            Some(t) => children.push(Child::Tree(t)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Unary, start, stop, children))
    }

    fn parse_reference(&mut self) -> Option<Tree> {
        let start = self.cursor_offset();
        let first = self.parse_literal_value()?;
        let mut children = vec![Child::Tree(first)];
        loop {
            if let Some(suffix) = self.parse_property_access() {
                children.push(Child::Tree(suffix));
            } else if let Some(suffix) = self.parse_optional_access() {
                children.push(Child::Tree(suffix));
            } else if let Some(suffix) = self.parse_array_index() {
                children.push(Child::Tree(suffix));
            } else if let Some(suffix) = self.parse_call() {
                children.push(Child::Tree(suffix));
            } else {
                break;
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Reference, start, stop, children))
    }

    fn parse_property_access(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::Dot) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        match self.expect(TokenKind::Identifier, "Expected identifier") {
            Some(id) => children.push(Self::leaf(id)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::PropertyAccess, start, stop, children))
    }

    fn parse_optional_access(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::OptionalDot) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        if let Some(id) = self.try_identifier() {
            children.push(Self::leaf(id));
        } else if let Some(index) = self.parse_array_index() {
            children.push(Child::Tree(index));
        } else if let Some(call) = self.parse_call() {
            children.push(Child::Tree(call));
        } else {
            self.discard(mark);
            let (s, e) = self.current_span();
            return self.fail("Expected identifier, index, or call after '?.'", s, e);
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::OptionalPropertyAccess, start, stop, children))
    }

    fn try_identifier(&mut self) -> Option<Token> {
        if self.at(TokenKind::Identifier) {
            Some(self.bump())
        } else {
            None
        }
    }

    fn parse_array_index(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::OpenBracket) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        match self.parse_expression_sequence() {
            Some(t) => children.push(Child::Tree(t)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        match self.expect(TokenKind::CloseBracket, "Expected ']'") {
            Some(close) => children.push(Self::leaf(close)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::ArrayIndex, start, stop, children))
    }

    fn parse_call(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::OpenParenthesis) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        if !self.at(TokenKind::CloseParenthesis) {
            loop {
                match self.parse_call_argument() {
                    Some(arg) => children.push(Child::Tree(arg)),
                    None => {
                        self.discard(mark);
                        return None;
                    }
                }
                if self.at(TokenKind::Comma) {
                    children.push(Self::leaf(self.bump()));
                    continue;
                }
                break;
            }
        }
        match self.expect(TokenKind::CloseParenthesis, "Expected ')'") {
            Some(close) => children.push(Self::leaf(close)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::MethodCall, start, stop, children))
    }

    fn parse_call_argument(&mut self) -> Option<Tree> {
        let start = self.cursor_offset();
        let expr = self.parse_assignment_expression()?;
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::MethodCallArgument, start, stop, vec![Child::Tree(expr)]))
    }

    fn parse_array_initializer(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::OpenBracket) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        if !self.at(TokenKind::CloseBracket) {
            loop {
                match self.parse_array_value() {
                    Some(v) => children.push(Child::Tree(v)),
                    None => {
                        self.discard(mark);
                        return None;
                    }
                }
                if self.at(TokenKind::Comma) {
                    children.push(Self::leaf(self.bump()));
                    continue;
                }
                break;
            }
        }
        match self.expect(TokenKind::CloseBracket, "Expected ']'") {
            Some(close) => children.push(Self::leaf(close)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::ArrayInitializer, start, stop, children))
    }

    fn parse_array_value(&mut self) -> Option<Tree> {
        let start = self.cursor_offset();
        let expr = self.parse_assignment_expression()?;
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::ArrayValue, start, stop, vec![Child::Tree(expr)]))
    }

    /// `Cast` is attempted after every plain atom but before the raw
    /// `( ExpressionSequence )` fallback: `(int)x` must commit to a cast
    /// before `(x)` gets a chance to claim the same opening paren.
    fn parse_literal_value(&mut self) -> Option<Tree> {
        let start = self.cursor_offset();

        if let Some(array) = self.parse_array_initializer() {
            let stop = self.cursor_offset();
            return Some(Self::tree(TreeKind::LiteralValue, start, stop, vec![Child::Tree(array)]));
        }

        if matches!(self.peek_kind(), Some(k) if SIMPLE_LITERAL_KINDS.contains(&k)) {
            let token = self.bump();
            let stop = self.cursor_offset();
            return Some(Self::tree(TreeKind::LiteralValue, start, stop, vec![Self::leaf(token)]));
        }

        if let Some(cast) = self.parse_cast() {
            let stop = self.cursor_offset();
            return Some(Self::tree(TreeKind::LiteralValue, start, stop, vec![Child::Tree(cast)]));
        }

        if self.at(TokenKind::OpenParenthesis) {
            let paren_mark = self.push();
            let mut children = vec![Self::leaf(self.bump())];
            match self.parse_expression_sequence() {
                Some(seq) => children.push(Child::Tree(seq)),
                None => {
                    self.discard(paren_mark);
                    let (s, e) = self.current_span();
                    return self.fail("Expected expression", s, e);
                }
            }
            match self.expect(TokenKind::CloseParenthesis, "Expected ')'") {
                Some(close) => children.push(Self::leaf(close)),
                None => {
                    self.discard(paren_mark);
                    return None;
                }
            }
            let stop = self.cursor_offset();
            return Some(Self::tree(TreeKind::LiteralValue, start, stop, children));
        }

        let (s, e) = self.current_span();
        self.fail("Expected expression", s, e)
    }

    fn parse_cast(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::OpenParenthesis) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        let ty = match self.parse_unary_type() {
            Some(t) => t,
            None => {
                self.discard(mark);
                return None;
            }
        };
        children.push(Child::Tree(ty));
        let close = match self.expect(TokenKind::CloseParenthesis, "Expected ')'") {
            Some(t) => t,
            None => {
                self.discard(mark);
                return None;
            }
        };
        children.push(Self::leaf(close));
        let value = match self.parse_literal_value() {
            Some(v) => v,
            None => {
                self.discard(mark);
                return None;
            }
        };
        children.push(Child::Tree(value));
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::TypeCast, start, stop, children))
    }
}

#[cfg(test)]
mod tests {
    use rue_lex::lex;

    use crate::cst::{Child, Tree, TreeKind};
    use crate::parser::Parser;

    fn parse_expr(source: &str) -> Tree {
        let tokens = lex(source).unwrap();
        let mut parser = Parser::new(&tokens, source.len());
        parser.parse_assignment_expression().expect("expression should parse")
    }

    fn unwrap_chain<'a>(tree: &'a Tree, kinds: &[TreeKind]) -> &'a Tree {
        let mut current = tree;
        for kind in kinds {
            assert_eq!(current.kind, *kind, "expected {:?} in chain", kind);
            match &current.children[0] {
                Child::Tree(t) => current = t,
                Child::Token(_) => panic!("expected a tree child"),
            }
        }
        current
    }

    #[test]
    fn precedence_multiplication_binds_tighter_than_addition() {
        // 1 + 2 * 3 -> Assignment/Ternary/.../Term[1, +, Factor[2, *, 3]]
        let tree = parse_expr("1 + 2 * 3");
        let term = unwrap_chain(
            &tree,
            &[
                TreeKind::Assignment,
                TreeKind::Ternary,
                TreeKind::Coalesce,
                TreeKind::LogicalOr,
                TreeKind::LogicalAnd,
                TreeKind::BitwiseOr,
                TreeKind::BitwiseXor,
                TreeKind::BitwiseAnd,
                TreeKind::Equality,
                TreeKind::Comparison,
                TreeKind::Shift,
                TreeKind::Term,
            ],
        );
        assert_eq!(term.children.len(), 3);
        let Child::Tree(factor) = &term.children[2] else { panic!() };
        assert_eq!(factor.kind, TreeKind::Factor);
        assert_eq!(factor.children.len(), 3);
    }

    #[test]
    fn single_assignment_succeeds() {
        let tree = parse_expr("a = b");
        assert_eq!(tree.kind, TreeKind::Assignment);
        assert_eq!(tree.children.len(), 3);
    }

    #[test]
    fn chained_assignment_is_rejected_at_the_outer_level() {
        // `a = b = c` must fail to parse as a single AssignmentExpression,
        // since the RHS grammar is Ternary, not Assignment.
        let tokens = lex("a = b = c").unwrap();
        let mut parser = Parser::new(&tokens, "a = b = c".len());
        let tree = parser.parse_assignment_expression().unwrap();
        // only `a = b` is consumed; `= c` is left over, starting at byte 6.
        assert_eq!(tree.stop, 6);
    }

    #[test]
    fn reference_chain_covers_property_optional_index_and_call() {
        let tree = parse_expr("a.b?.c[0](x, y)");
        let reference = unwrap_chain(
            &tree,
            &[
                TreeKind::Assignment,
                TreeKind::Ternary,
                TreeKind::Coalesce,
                TreeKind::LogicalOr,
                TreeKind::LogicalAnd,
                TreeKind::BitwiseOr,
                TreeKind::BitwiseXor,
                TreeKind::BitwiseAnd,
                TreeKind::Equality,
                TreeKind::Comparison,
                TreeKind::Shift,
                TreeKind::Term,
                TreeKind::Factor,
                TreeKind::Range,
                TreeKind::Unary,
                TreeKind::Reference,
            ],
        );
        let suffix_kinds: Vec<_> = reference.children[1..]
            .iter()
            .map(|c| match c {
                Child::Tree(t) => t.kind,
                Child::Token(_) => panic!("expected a tree child"),
            })
            .collect();
        assert_eq!(
            suffix_kinds,
            vec![
                TreeKind::PropertyAccess,
                TreeKind::OptionalPropertyAccess,
                TreeKind::ArrayIndex,
                TreeKind::MethodCall,
            ]
        );
    }

    #[test]
    fn cast_is_preferred_over_parenthesized_expression() {
        let tree = parse_expr("(int)x");
        let literal = unwrap_chain(
            &tree,
            &[
                TreeKind::Assignment,
                TreeKind::Ternary,
                TreeKind::Coalesce,
                TreeKind::LogicalOr,
                TreeKind::LogicalAnd,
                TreeKind::BitwiseOr,
                TreeKind::BitwiseXor,
                TreeKind::BitwiseAnd,
                TreeKind::Equality,
                TreeKind::Comparison,
                TreeKind::Shift,
                TreeKind::Term,
                TreeKind::Factor,
                TreeKind::Range,
                TreeKind::Unary,
                TreeKind::Reference,
            ],
        );
        let Child::Tree(inner) = &literal.children[0] else { panic!() };
        let Child::Tree(cast) = &inner.children[0] else { panic!() };
        assert_eq!(cast.kind, TreeKind::TypeCast);
    }

    #[test]
    fn parenthesized_expression_without_cast_shape() {
        let tree = parse_expr("(x)");
        let literal = unwrap_chain(
            &tree,
            &[
                TreeKind::Assignment,
                TreeKind::Ternary,
                TreeKind::Coalesce,
                TreeKind::LogicalOr,
                TreeKind::LogicalAnd,
                TreeKind::BitwiseOr,
                TreeKind::BitwiseXor,
                TreeKind::BitwiseAnd,
                TreeKind::Equality,
                TreeKind::Comparison,
                TreeKind::Shift,
                TreeKind::Term,
                TreeKind::Factor,
                TreeKind::Range,
                TreeKind::Unary,
                TreeKind::Reference,
            ],
        );
        let Child::Tree(inner) = &literal.children[0] else { panic!() };
        assert_eq!(inner.kind, TreeKind::LiteralValue);
        // '(' ExpressionSequence ')' -> 3 children, no TypeCast involved.
        assert_eq!(inner.children.len(), 3);
    }

    #[test]
    fn range_with_both_sides_absent_is_rejected() {
        let tokens = lex(";").unwrap();
        let mut parser = Parser::new(&tokens, ";".len());
        assert!(parser.parse_assignment_expression().is_none());
    }

    #[test]
    fn range_with_only_right_side() {
        let tree = parse_expr("..end");
        let range = unwrap_chain(
            &tree,
            &[
                TreeKind::Assignment,
                TreeKind::Ternary,
                TreeKind::Coalesce,
                TreeKind::LogicalOr,
                TreeKind::LogicalAnd,
                TreeKind::BitwiseOr,
                TreeKind::BitwiseXor,
                TreeKind::BitwiseAnd,
                TreeKind::Equality,
                TreeKind::Comparison,
                TreeKind::Shift,
                TreeKind::Term,
                TreeKind::Factor,
                TreeKind::Range,
            ],
        );
        assert_eq!(range.children.len(), 2);
    }
}
