//! The debug pretty-printer: not used for diagnostics (that's
//! [`rue_util::render_error`]), just a stable, human-readable dump of a CST
//! or token sequence.
//!
//! Trees with exactly one child are transparent: the wrapper production
//! (most statement/expression tiers, when nothing besides the single
//! operand matched) contributes no information of its own, so it collapses
//! straight to that child rather than adding an indent level.

use rue_lex::Token;

use crate::cst::{Child, Tree};

/// Either a parsed [`Tree`] or a raw token sequence, the two things
/// `stringify` accepts.
pub enum Stringifiable<'a> {
    Tree(&'a Tree),
    Tokens(&'a [Token]),
}

pub fn stringify(input: Stringifiable) -> String {
    let mut out = String::new();
    match input {
        Stringifiable::Tree(tree) => write_tree(tree, 0, &mut out),
        Stringifiable::Tokens(tokens) => {
            for token in tokens {
                write_token(token, 0, &mut out);
            }
        }
    }
    out
}

fn write_tree(tree: &Tree, depth: usize, out: &mut String) {
    if tree.children.len() == 1 {
        write_child(&tree.children[0], depth, out);
        return;
    }
    indent(depth, out);
    out.push_str(&format!("{:?} ({}-{})\n", tree.kind, tree.start, tree.stop));
    for child in &tree.children {
        write_child(child, depth + 1, out);
    }
}

fn write_child(child: &Child, depth: usize, out: &mut String) {
    match child {
        Child::Token(token) => write_token(token, depth, out),
        Child::Tree(tree) => write_tree(tree, depth, out),
    }
}

fn write_token(token: &Token, depth: usize, out: &mut String) {
    indent(depth, out);
    out.push_str(&format!("{:?} {:?} ({}-{})\n", token.kind, token.text, token.start, token.stop));
}

fn indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str("  ");
    }
}
