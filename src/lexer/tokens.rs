use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("int", TokenKind::Int);
        map.insert("return", TokenKind::Return);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Reserved
    If,
    Else,
    Int,
    Return,
    For,
    While,

    Identifier,
    IntLiteral,
    FloatLiteral,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Plus,
    Dash,
    Star,
    Slash,
    Percent,

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,
    Semicolon,
    Comma,
    Dot,

    EOF,
}

impl TokenKind {
    /// The stable name downstream tools match on.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Int => "INT",
            TokenKind::Return => "RETURN",
            TokenKind::For => "FOR",
            TokenKind::While => "WHILE",
            TokenKind::Identifier => "ID",
            TokenKind::IntLiteral => "INT_LIT",
            TokenKind::FloatLiteral => "FLOAT_LIT",
            TokenKind::Assignment => "ASSIGN",
            TokenKind::Equals => "EQ",
            TokenKind::NotEquals => "NE",
            TokenKind::Less => "LT",
            TokenKind::Greater => "GT",
            TokenKind::LessEquals => "LE",
            TokenKind::GreaterEquals => "GE",
            TokenKind::Plus => "PLUS",
            TokenKind::Dash => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "MOD",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
            TokenKind::OpenCurly => "LBRACE",
            TokenKind::CloseCurly => "RBRACE",
            TokenKind::OpenBracket => "LBRACKET",
            TokenKind::CloseBracket => "RBRACKET",
            TokenKind::Semicolon => "SEMI",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::EOF => "EOF",
        }
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Else
                | TokenKind::Int
                | TokenKind::Return
                | TokenKind::For
                | TokenKind::While
        )
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, TokenKind::IntLiteral | TokenKind::FloatLiteral)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A classified slice of source text. `value` is `None` only for `EOF`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
    pub line: u32,
    pub column: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}\t\"{}\"\t({}:{})", self.kind, value, self.line, self.column),
            None => write!(f, "{}\t({}:{})", self.kind, self.line, self.column),
        }
    }
}

impl Token {
    pub fn text(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn debug(&self) {
        println!("{}", self);
    }
}
