use std::fmt::{self, Display};

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Every lexical category the scanner can produce, named after the
/// `tokenize` subcommand's output format rather than after Rust conventions.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACE,
    RIGHT_BRACE,
    STAR,
    DOT,
    COMMA,
    PLUS,
    MINUS,
    SLASH,
    SEMICOLON,
    EQUAL,
    EQUAL_EQUAL,
    BANG,
    BANG_EQUAL,
    GREATER,
    GREATER_EQUAL,
    LESS,
    LESS_EQUAL,
    STRING,
    NUMBER,
    IDENTIFIER,
    AND,
    CLASS,
    ELSE,
    FALSE,
    FUN,
    FOR,
    IF,
    NIL,
    OR,
    PRINT,
    RETURN,
    SUPER,
    THIS,
    TRUE,
    VAR,
    WHILE,
    EOF,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Reserved words, checked after an identifier has been greedily scanned.
pub static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    use TokenKind::*;
    HashMap::from([
        ("and", AND),
        ("class", CLASS),
        ("else", ELSE),
        ("false", FALSE),
        ("for", FOR),
        ("fun", FUN),
        ("if", IF),
        ("nil", NIL),
        ("or", OR),
        ("print", PRINT),
        ("return", RETURN),
        ("super", SUPER),
        ("this", THIS),
        ("true", TRUE),
        ("var", VAR),
        ("while", WHILE),
    ])
});

/// The literal payload a token carries, if any.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    None,
    Str(String),
    Num(f64),
}

/// A single lexical token. Simple tokens carry `Literal::None`; `STRING` and
/// `NUMBER` tokens carry their decoded value alongside the source lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub literal: Literal,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Literal, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::EOF, "", Literal::None, line)
    }

    /// Render this token the way the `tokenize` subcommand prints it:
    /// `KIND lexeme literal`.
    pub fn format_line(&self) -> String {
        match &self.kind {
            TokenKind::EOF => "EOF  null".to_owned(),
            TokenKind::STRING => {
                let Literal::Str(value) = &self.literal else {
                    unreachable!("STRING token without a string literal")
                };
                format!("STRING \"{value}\" {value}")
            }
            TokenKind::NUMBER => {
                let Literal::Num(value) = &self.literal else {
                    unreachable!("NUMBER token without a numeric literal")
                };
                format!("NUMBER {} {}", self.lexeme, format_number_literal(*value))
            }
            kind => format!("{kind} {} null", self.lexeme),
        }
    }
}

/// Render a double the way the `tokenize` subcommand wants it: at least one
/// fractional digit, e.g. `42` lexes to the literal rendering `42.0`.
fn format_number_literal(value: f64) -> String {
    if value == value.trunc() {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
