//! Statement and declaration grammar: control flow, declarations, match
//! arms, and labeled statements.

use rue_lex::TokenKind;

use super::Parser;
use crate::cst::{Child, Tree, TreeKind};

impl<'a> Parser<'a> {
    pub(crate) fn parse_body(&mut self) -> Option<Tree> {
        let start = self.cursor_offset();
        let mut children = Vec::new();
        while let Some(stmt) = self.parse_statement() {
            children.push(Child::Tree(stmt));
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Body, start, stop, children))
    }

    /// Tries each statement alternative in grammar order; the first match
    /// wins. Because `Labeled` is tried before a plain expression
    /// statement, a bare `identifier ':'` is always a label, never the
    /// start of some other construct.
    fn parse_statement(&mut self) -> Option<Tree> {
        let start = self.cursor_offset();
        let inner = self
            .parse_labeled()
            .or_else(|| self.parse_field())
            .or_else(|| self.parse_expr_stmt())
            .or_else(|| self.parse_def())
            .or_else(|| self.parse_if())
            .or_else(|| self.parse_while())
            .or_else(|| self.parse_match())
            .or_else(|| self.parse_do())
            .or_else(|| self.parse_for())
            .or_else(|| self.parse_return())
            .or_else(|| self.parse_continue())
            .or_else(|| self.parse_break())
            .or_else(|| self.parse_block())
            .or_else(|| self.parse_empty())?;
        let stop = inner.stop;
        Some(Self::tree(TreeKind::Statement, start, stop, vec![Child::Tree(inner)]))
    }

    fn parse_labeled(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::Identifier) {
            return None;
        }
        let id = self.bump();
        if !self.at(TokenKind::Colon) {
            self.discard(mark);
            return None;
        }
        let mut children = vec![Self::leaf(id), Self::leaf(self.bump())];
        match self.parse_statement() {
            Some(stmt) => children.push(Child::Tree(stmt)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Labeled, start, stop, children))
    }

    pub(crate) fn parse_block(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::OpenBrace) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        while let Some(stmt) = self.parse_statement() {
            children.push(Child::Tree(stmt));
        }
        match self.expect(TokenKind::CloseBrace, "Expected '}'") {
            Some(close) => children.push(Self::leaf(close)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Block, start, stop, children))
    }

    /// `else` attaches to the innermost open `if`: the nested `Statement`
    /// call below greedily consumes its own `else` (if any) before this
    /// frame ever looks for one of its own.
    fn parse_if(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::If) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        if self.consume_clause(&mut children, TokenKind::OpenParenthesis, "Expected '('").is_none() {
            self.discard(mark);
            return None;
        }
        match self.parse_expression_sequence() {
            Some(t) => children.push(Child::Tree(t)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        if self.consume_clause(&mut children, TokenKind::CloseParenthesis, "Expected ')'").is_none() {
            self.discard(mark);
            return None;
        }
        match self.parse_statement() {
            Some(t) => children.push(Child::Tree(t)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        if self.at(TokenKind::Else) {
            children.push(Self::leaf(self.bump()));
            match self.parse_statement() {
                Some(t) => children.push(Child::Tree(t)),
                None => {
                    self.discard(mark);
                    return None;
                }
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::If, start, stop, children))
    }

    fn parse_while(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::While) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        if self.consume_clause(&mut children, TokenKind::OpenParenthesis, "Expected '('").is_none() {
            self.discard(mark);
            return None;
        }
        match self.parse_expression_sequence() {
            Some(t) => children.push(Child::Tree(t)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        if self.consume_clause(&mut children, TokenKind::CloseParenthesis, "Expected ')'").is_none() {
            self.discard(mark);
            return None;
        }
        match self.parse_statement() {
            Some(t) => children.push(Child::Tree(t)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::While, start, stop, children))
    }

    fn parse_do(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::Do) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        match self.parse_statement() {
            Some(t) => children.push(Child::Tree(t)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        if self.consume_clause(&mut children, TokenKind::While, "Expected 'while'").is_none() {
            self.discard(mark);
            return None;
        }
        if self.consume_clause(&mut children, TokenKind::OpenParenthesis, "Expected '('").is_none() {
            self.discard(mark);
            return None;
        }
        match self.parse_expression_sequence() {
            Some(t) => children.push(Child::Tree(t)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        if self.consume_clause(&mut children, TokenKind::CloseParenthesis, "Expected ')'").is_none() {
            self.discard(mark);
            return None;
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Do, start, stop, children))
    }

    fn parse_for(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::For) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        if self.consume_clause(&mut children, TokenKind::OpenParenthesis, "Expected '('").is_none() {
            self.discard(mark);
            return None;
        }
        if self.consume_clause(&mut children, TokenKind::Identifier, "Expected identifier").is_none() {
            self.discard(mark);
            return None;
        }
        if self.consume_clause(&mut children, TokenKind::In, "Expected 'in'").is_none() {
            self.discard(mark);
            return None;
        }
        match self.parse_assignment_expression() {
            Some(t) => children.push(Child::Tree(t)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        if self.consume_clause(&mut children, TokenKind::CloseParenthesis, "Expected ')'").is_none() {
            self.discard(mark);
            return None;
        }
        match self.parse_statement() {
            Some(t) => children.push(Child::Tree(t)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::For, start, stop, children))
    }

    fn parse_return(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::Return) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        if !self.at(TokenKind::Semicolon) {
            let expr_mark = self.push();
            match self.parse_expression_sequence() {
                Some(t) => children.push(Child::Tree(t)),
                None => self.discard(expr_mark),
            }
        }
        if self.consume_clause(&mut children, TokenKind::Semicolon, "Expected ';'").is_none() {
            self.discard(mark);
            return None;
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Return, start, stop, children))
    }

    fn parse_continue(&mut self) -> Option<Tree> {
        self.parse_labeled_jump(TokenKind::Continue, TreeKind::Continue)
    }

    fn parse_break(&mut self) -> Option<Tree> {
        self.parse_labeled_jump(TokenKind::Break, TreeKind::Break)
    }

    fn parse_labeled_jump(&mut self, keyword: TokenKind, kind: TreeKind) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(keyword) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        if self.at(TokenKind::Identifier) {
            children.push(Self::leaf(self.bump()));
        }
        if self.consume_clause(&mut children, TokenKind::Semicolon, "Expected ';'").is_none() {
            self.discard(mark);
            return None;
        }
        let stop = self.cursor_offset();
        Some(Self::tree(kind, start, stop, children))
    }

    fn parse_empty(&mut self) -> Option<Tree> {
        if !self.at(TokenKind::Semicolon) {
            return None;
        }
        let start = self.cursor_offset();
        let semi = self.bump();
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Empty, start, stop, vec![Self::leaf(semi)]))
    }

    fn parse_expr_stmt(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        let expr = self.parse_expression_sequence()?;
        let mut children = vec![Child::Tree(expr)];
        if self.consume_clause(&mut children, TokenKind::Semicolon, "Expected ';'").is_none() {
            self.discard(mark);
            return None;
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Expression, start, stop, children))
    }

    fn parse_field(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        match self.peek_kind() {
            Some(TokenKind::Val) | Some(TokenKind::Var) => {}
            _ => return None,
        }
        let mut children = vec![Self::leaf(self.bump())];
        if self.consume_clause(&mut children, TokenKind::Identifier, "Expected identifier").is_none() {
            self.discard(mark);
            return None;
        }
        if self.at(TokenKind::Colon) {
            children.push(Self::leaf(self.bump()));
            match self.parse_union_type() {
                Some(t) => children.push(Child::Tree(t)),
                None => {
                    self.discard(mark);
                    return None;
                }
            }
        }
        if self.at(TokenKind::Assign) {
            children.push(Self::leaf(self.bump()));
            match self.parse_assignment_expression() {
                Some(t) => children.push(Child::Tree(t)),
                None => {
                    self.discard(mark);
                    return None;
                }
            }
        }
        if self.consume_clause(&mut children, TokenKind::Semicolon, "Expected ';'").is_none() {
            self.discard(mark);
            return None;
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Field, start, stop, children))
    }

    fn parse_def(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::Def) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        if self.consume_clause(&mut children, TokenKind::Identifier, "Expected identifier").is_none() {
            self.discard(mark);
            return None;
        }
        match self.parse_parameters() {
            Some(t) => children.push(Child::Tree(t)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        if self.at(TokenKind::Colon) {
            children.push(Self::leaf(self.bump()));
            match self.parse_unary_type() {
                Some(t) => children.push(Child::Tree(t)),
                None => {
                    self.discard(mark);
                    return None;
                }
            }
        }
        if let Some(block) = self.parse_block() {
            children.push(Child::Tree(block));
        } else if let Some(empty) = self.parse_empty() {
            children.push(Child::Tree(empty));
        } else {
            self.discard(mark);
            let (s, e) = self.current_span();
            return self.fail("Expected block or ';'", s, e);
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Def, start, stop, children))
    }

    fn parse_parameters(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::OpenParenthesis) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        if !self.at(TokenKind::CloseParenthesis) {
            loop {
                match self.parse_parameter() {
                    Some(p) => children.push(Child::Tree(p)),
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
        if self.consume_clause(&mut children, TokenKind::CloseParenthesis, "Expected ')'").is_none() {
            self.discard(mark);
            return None;
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Parameters, start, stop, children))
    }

    fn parse_parameter(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if self.at(TokenKind::Ellipsis) {
            let stop_token = self.bump();
            let stop = self.cursor_offset();
            return Some(Self::tree(TreeKind::Parameter, start, stop, vec![Self::leaf(stop_token)]));
        }
        if !self.at(TokenKind::Identifier) {
            let (s, e) = self.current_span();
            return self.fail("Expected parameter", s, e);
        }
        let mut children = vec![Self::leaf(self.bump())];
        if self.consume_clause(&mut children, TokenKind::Colon, "Expected ':'").is_none() {
            self.discard(mark);
            return None;
        }
        match self.parse_unary_type() {
            Some(t) => children.push(Child::Tree(t)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Parameter, start, stop, children))
    }

    fn parse_match(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        if !self.at(TokenKind::Match) {
            return None;
        }
        let mut children = vec![Self::leaf(self.bump())];
        if self.consume_clause(&mut children, TokenKind::OpenParenthesis, "Expected '('").is_none() {
            self.discard(mark);
            return None;
        }
        match self.parse_expression_sequence() {
            Some(t) => children.push(Child::Tree(t)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        if self.consume_clause(&mut children, TokenKind::CloseParenthesis, "Expected ')'").is_none() {
            self.discard(mark);
            return None;
        }
        if self.consume_clause(&mut children, TokenKind::OpenBrace, "Expected '{'").is_none() {
            self.discard(mark);
            return None;
        }
        while let Some(option) = self.parse_match_option() {
            children.push(Child::Tree(option));
        }
        // `match`'s fallback body is never required to be non-empty: this
        // mirrors the relaxed "zero or more options, then a body" reading.
        if let Some(body) = self.parse_body() {
            children.push(Child::Tree(body));
        }
        if self.consume_clause(&mut children, TokenKind::CloseBrace, "Expected '}'").is_none() {
            self.discard(mark);
            return None;
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::Match, start, stop, children))
    }

    fn parse_match_option(&mut self) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        let expr = self.parse_assignment_expression()?;
        if !self.at(TokenKind::FatArrow) {
            self.discard(mark);
            return None;
        }
        let mut children = vec![Child::Tree(expr), Self::leaf(self.bump())];
        match self.parse_statement() {
            Some(t) => children.push(Child::Tree(t)),
            None => {
                self.discard(mark);
                return None;
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(TreeKind::MatchOption, start, stop, children))
    }

    /// Consumes one expected token and pushes it as a leaf, returning
    /// `None` (after recording the furthest error) on mismatch.
    fn consume_clause(&mut self, children: &mut Vec<Child>, kind: TokenKind, message: &str) -> Option<()> {
        match self.expect(kind, message) {
            Some(token) => {
                children.push(Self::leaf(token));
                Some(())
            }
            None => None,
        }
    }
}
