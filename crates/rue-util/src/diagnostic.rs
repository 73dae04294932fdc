//! The diagnostic model shared by the lexer and the parser.
//!
//! Both phases report failure through the same [`Diagnostic`] shape; only
//! the [`Phase`] tag differs. There is no multi-diagnostic accumulation
//! here (contrast a typical `Handler` that collects warnings as it goes) —
//! lexing and parsing are both all-or-nothing, so a single `Diagnostic` is
//! the complete failure value of a call.

use std::fmt;

/// Which stage produced a [`Diagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Lex,
    Parse,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Lex => write!(f, "lex"),
            Phase::Parse => write!(f, "parse"),
        }
    }
}

/// A single diagnostic: the one and only failure value of `lex` or `parse`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct Diagnostic {
    pub phase: Phase,
    pub message: String,
    /// The offending snippet, when there is a single meaningful one (e.g. a
    /// lexer's unexpected byte). `None` for most parser errors.
    pub content: Option<String>,
    pub start: usize,
    pub stop: usize,
}

impl Diagnostic {
    pub fn lex(message: impl Into<String>, start: usize, stop: usize) -> Self {
        Diagnostic {
            phase: Phase::Lex,
            message: message.into(),
            content: None,
            start,
            stop,
        }
    }

    pub fn lex_with_content(
        message: impl Into<String>,
        content: impl Into<String>,
        start: usize,
        stop: usize,
    ) -> Self {
        Diagnostic {
            phase: Phase::Lex,
            message: message.into(),
            content: Some(content.into()),
            start,
            stop,
        }
    }

    pub fn parse(message: impl Into<String>, start: usize, stop: usize) -> Self {
        Diagnostic {
            phase: Phase::Parse,
            message: message.into(),
            content: None,
            start,
            stop,
        }
    }
}

/// The error kind returned by [`rue_lex::lex`](../../rue_lex/fn.lex.html).
pub type LexError = Diagnostic;

/// The error kind returned by `rue_parse::parse`.
pub type ParseError = Diagnostic;
