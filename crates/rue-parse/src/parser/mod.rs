//! The recursive-descent parser engine: cursor, speculation discipline, and
//! the furthest-error memo shared by every production.
//!
//! A production's "view" is just `self.position` — an index into the
//! immutable token slice. Pushing a speculative copy of the cursor is
//! therefore a cheap `usize` copy, not a deep clone of a token vector;
//! commit is a no-op (the position already points past what was consumed)
//! and discard is restoring the saved index.

mod expr;
mod statement;
mod types;

use rue_lex::{Token, TokenKind};
use rue_util::ParseError;

use crate::cst::{Child, Tree, TreeKind};

pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    source_len: usize,
    furthest_error: Option<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], source_len: usize) -> Self {
        Parser { tokens, position: 0, source_len, furthest_error: None }
    }

    /// Runs the full grammar: a `Body` must consume every token, or the
    /// parser reports an error.
    ///
    /// `parse_body` always returns `Some` (a `Body` can have zero
    /// statements), so leftover tokens are the only way a top-level parse
    /// can be incomplete. Every statement alternative that failed along the
    /// way discarded back to its own entry mark, so the cursor here sits at
    /// the start of whatever didn't parse rather than at the deepest point
    /// actually reached — `furthest_error` is what remembers that deeper
    /// point, and takes priority over the generic leftover-token message.
    pub fn parse(mut self) -> Result<Tree, ParseError> {
        let body = self.parse_body().expect("parse_body always returns Some");
        if self.is_at_end() {
            return Ok(body);
        }
        Err(self.furthest_error.take().unwrap_or_else(|| {
            let token = self.peek().expect("not at end");
            ParseError::parse("Unexpected token", token.start, token.stop)
        }))
    }

    // --- cursor primitives ---

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.peek_kind() == Some(kind)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// The byte offset the cursor currently sits at: the start of the next
    /// unconsumed token, or end-of-source once every token is consumed.
    fn cursor_offset(&self) -> usize {
        match self.peek() {
            Some(t) => t.start,
            None => self.source_len,
        }
    }

    /// Pushes a speculative copy of the cursor (§4.2.1 "On entry").
    fn push(&self) -> usize {
        self.position
    }

    /// Discards a speculative attempt, restoring the cursor to `mark`
    /// (§4.2.1 "On failure: pop ... without committing").
    fn discard(&mut self, mark: usize) {
        self.position = mark;
    }

    fn bump(&mut self) -> Token {
        let token = self.tokens[self.position].clone();
        self.position += 1;
        token
    }

    /// Consumes the current token if it has `kind`, recording a furthest
    /// error otherwise.
    fn expect(&mut self, kind: TokenKind, message: &str) -> Option<Token> {
        match self.peek() {
            Some(t) if t.kind == kind => Some(self.bump()),
            Some(t) => {
                self.record(ParseError::parse(message, t.start, t.stop));
                None
            }
            None => {
                self.record(ParseError::parse(message, self.source_len, self.source_len));
                None
            }
        }
    }

    /// Records `err` as the furthest error seen so far: later wins ties
    /// (§4.2.3 "Error selection").
    fn record(&mut self, err: ParseError) {
        let replace = match &self.furthest_error {
            None => true,
            Some(stored) => err.start >= stored.start,
        };
        if replace {
            self.furthest_error = Some(err);
        }
    }

    fn fail<T>(&mut self, message: &str, start: usize, stop: usize) -> Option<T> {
        self.record(ParseError::parse(message, start, stop));
        None
    }

    fn leaf(token: Token) -> Child {
        Child::Token(token)
    }

    fn tree(kind: TreeKind, start: usize, stop: usize, children: Vec<Child>) -> Tree {
        Tree::new(kind, start, stop, children)
    }

    /// The span of the current token, or a zero-width span at end-of-source.
    fn current_span(&self) -> (usize, usize) {
        match self.peek() {
            Some(t) => (t.start, t.stop),
            None => (self.source_len, self.source_len),
        }
    }

    /// Shared shape for every left-associative `operand (op operand)*`
    /// precedence tier. `operand` is a plain fn pointer (e.g.
    /// `Self::parse_term`), not a closure, since every tier's operand is
    /// just the next tier down.
    fn parse_binary_level(
        &mut self,
        kind: TreeKind,
        operators: &[TokenKind],
        operand: fn(&mut Self) -> Option<Tree>,
    ) -> Option<Tree> {
        let mark = self.push();
        let start = self.cursor_offset();
        let first = operand(self)?;
        let mut children = vec![Child::Tree(first)];
        while let Some(op_kind) = self.peek_kind() {
            if !operators.contains(&op_kind) {
                break;
            }
            children.push(Self::leaf(self.bump()));
            match operand(self) {
                Some(t) => children.push(Child::Tree(t)),
                None => {
                    self.discard(mark);
                    return None;
                }
            }
        }
        let stop = self.cursor_offset();
        Some(Self::tree(kind, start, stop, children))
    }
}
