//! The keyword / reserved-word dictionary.
//!
//! Identifier shape is matched first; the resulting lexeme is then looked
//! up here. A hit yields the reserved token kind, a miss yields a plain
//! `Identifier`. Because this lookup is global and context-free, a keyword
//! can never be reused as a label, even in positions (like `else:`) where
//! only `parseIfStatement` actually interprets the keyword meaning.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::token::TokenKind;

fn table() -> &'static FxHashMap<&'static str, TokenKind> {
    static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
    TABLE.get_or_init(|| {
        use TokenKind::*;
        let mut m = FxHashMap::default();
        m.insert("and", And);
        m.insert("or", Or);
        m.insert("not", Not);
        m.insert("for", For);
        m.insert("while", While);
        m.insert("continue", Continue);
        m.insert("break", Break);
        m.insert("return", Return);
        m.insert("macro", Macro);
        m.insert("public", Public);
        m.insert("private", Private);
        m.insert("protected", Protected);
        m.insert("do", Do);
        m.insert("is", Is);
        m.insert("as", As);
        m.insert("if", If);
        m.insert("else", Else);
        m.insert("try", Try);
        m.insert("catch", Catch);
        m.insert("throw", Throw);
        m.insert("finally", Finally);
        m.insert("defer", Defer);
        m.insert("def", Def);
        m.insert("val", Val);
        m.insert("var", Var);
        m.insert("in", In);
        m.insert("match", Match);
        m.insert("from", From);
        m.insert("import", Import);
        m.insert("export", Export);
        m.insert("extern", Extern);
        m.insert("type", Type);
        m.insert("enum", Enum);
        m.insert("struct", Struct);
        m.insert("class", Class);
        m.insert("super", Super);
        m.insert("this", This);
        m.insert("null", Null);

        m.insert("void", VoidType);
        m.insert("int", IntegerType);
        m.insert("i8", IntegerType);
        m.insert("i16", IntegerType);
        m.insert("i32", IntegerType);
        m.insert("i64", IntegerType);
        m.insert("uint", UnsignedIntegerType);
        m.insert("u8", UnsignedIntegerType);
        m.insert("u16", UnsignedIntegerType);
        m.insert("u32", UnsignedIntegerType);
        m.insert("u64", UnsignedIntegerType);
        m.insert("float", FloatType);
        m.insert("f32", FloatType);
        m.insert("f64", FloatType);
        m.insert("bool", BooleanType);
        m.insert("string", StringType);

        m.insert("true", BoolLiteral);
        m.insert("false", BoolLiteral);
        m
    })
}

/// Looks up `text` in the keyword dictionary, returning the reserved kind
/// if it is one.
pub fn lookup(text: &str) -> Option<TokenKind> {
    table().get(text).copied()
}
