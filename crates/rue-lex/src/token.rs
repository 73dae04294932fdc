//! The token model: the closed set of lexeme kinds and the span-carrying
//! record the lexer emits for each one.

use rue_util::Span;

/// A single lexeme, tagged with its kind, exact text, and byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The exact byte slice consumed from source, except for
    /// [`TokenKind::StringLiteral`], whose `text` is the *decoded* content
    /// with surrounding quotes stripped.
    pub text: String,
    pub start: usize,
    pub stop: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize, stop: usize) -> Self {
        Token { kind, text: text.into(), start, stop }
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.stop)
    }
}

/// The closed set of token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // --- keywords ---
    And, Or, Not, For, While, Continue, Break, Return, Macro, Public, Private,
    Protected, Do, Is, As, If, Else, Try, Catch, Throw, Finally, Defer, Def,
    Val, Var, In, Match, From, Import, Export, Extern, Type, Enum, Struct,
    Class, Super, This, Null,

    // --- collapsed type keywords ---
    VoidType, IntegerType, UnsignedIntegerType, FloatType, BooleanType, StringType,

    // --- literals ---
    Identifier, IntLiteral, FloatLiteral, BinaryLiteral, OctalLiteral,
    HexadecimalLiteral, StringLiteral, BoolLiteral,

    // --- operators / punctuators ---
    LeftShiftAssign, LeftShift, Less, LessEqual,
    UnsignedRightShiftAssign, UnsignedRightShift, RightShiftAssign, RightShift,
    GreaterEqual, Greater,
    Equal, NotEqual,
    PlusAssign, MinusAssign, StarAssign, SlashAssign, PercentAssign,
    AmpersandAssign, PipeAssign, CaretAssign, QuestionAssign,
    FatArrow, Assign,
    Plus, Minus, Star, Slash, Percent, Ampersand, Pipe, Caret, Tilde, Question,
    Coalesce, OptionalDot, Ellipsis, DotDot, Dot,

    // --- structural ---
    OpenParenthesis, CloseParenthesis, OpenBracket, CloseBracket,
    OpenBrace, CloseBrace, Semicolon, Colon, Comma, Underscore,
}

impl TokenKind {
    /// True for kinds that always carry the same fixed lexeme text (every
    /// kind except the literal/identifier kinds).
    pub fn is_fixed_lexeme(&self) -> bool {
        !matches!(
            self,
            TokenKind::Identifier
                | TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::BinaryLiteral
                | TokenKind::OctalLiteral
                | TokenKind::HexadecimalLiteral
                | TokenKind::StringLiteral
                | TokenKind::BoolLiteral
                | TokenKind::VoidType
                | TokenKind::IntegerType
                | TokenKind::UnsignedIntegerType
                | TokenKind::FloatType
                | TokenKind::BooleanType
                | TokenKind::StringType
        )
    }
}
