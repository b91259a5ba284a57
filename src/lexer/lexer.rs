use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new("^[A-Za-z_][A-Za-z0-9_]*").unwrap();
    // A bare trailing `.` is left for the punctuation table, and an exponent
    // is only taken when digits follow it.
    static ref NUMBER: Regex =
        Regex::new("^(?:[0-9]+(?:\\.[0-9]+)?|\\.[0-9]+)(?P<exponent>[eE][+-]?[0-9]+)?").unwrap();
}

const TWO_CHAR_OPERATORS: [(&str, TokenKind); 4] = [
    ("==", TokenKind::Equals),
    ("!=", TokenKind::NotEquals),
    ("<=", TokenKind::LessEquals),
    (">=", TokenKind::GreaterEquals),
];

fn single_char_kind(ch: char) -> Option<TokenKind> {
    let kind = match ch {
        '=' => TokenKind::Assignment,
        '<' => TokenKind::Less,
        '>' => TokenKind::Greater,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Dash,
        '*' => TokenKind::Star,
        '/' => TokenKind::Slash,
        '%' => TokenKind::Percent,
        '(' => TokenKind::OpenParen,
        ')' => TokenKind::CloseParen,
        '{' => TokenKind::OpenCurly,
        '}' => TokenKind::CloseCurly,
        '[' => TokenKind::OpenBracket,
        ']' => TokenKind::CloseBracket,
        ';' => TokenKind::Semicolon,
        ',' => TokenKind::Comma,
        '.' => TokenKind::Dot,
        _ => return None,
    };

    Some(kind)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    offset: usize,
    line: u32,
    column: u32,
}

/// Single-pass maximal-munch scanner over an in-memory source buffer.
///
/// Tokens are produced strictly left to right. Once the end of input is
/// reached, `next_token` keeps returning `EOF` at the same position.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    keywords: &'a HashMap<&'static str, TokenKind>,
    cursor: Cursor,
    finished: bool,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner::with_keywords(source, &RESERVED_LOOKUP)
    }

    pub fn with_keywords(source: &'a str, keywords: &'a HashMap<&'static str, TokenKind>) -> Scanner<'a> {
        Scanner {
            source,
            keywords,
            cursor: Cursor { offset: 0, line: 1, column: 1 },
            finished: false,
        }
    }

    /// Named apart from `Iterator::position`, which `&mut Scanner` also has.
    pub fn cursor_position(&self) -> Position {
        Position::new(self.cursor.line, self.cursor.column)
    }

    /// Byte offset of the cursor into the source.
    pub fn offset(&self) -> usize {
        self.cursor.offset
    }

    pub fn at_eof(&self) -> bool {
        self.cursor.offset >= self.source.len()
    }

    fn remainder(&self) -> &'a str {
        &self.source[self.cursor.offset..]
    }

    fn peek(&self, n: usize) -> Option<char> {
        self.remainder().chars().nth(n)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.peek(0) {
            self.cursor.offset += ch.len_utf8();
            if ch == '\n' {
                self.cursor.line += 1;
                self.cursor.column = 1;
            } else {
                self.cursor.column += 1;
            }
        }
    }

    fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Consumes `text`, which must be the prefix of the remainder.
    fn advance_over(&mut self, text: &str) {
        self.advance_n(text.chars().count());
    }

    fn fail(&self, error_impl: ErrorImpl, position: Position) -> Error {
        debug!(%position, offset = self.offset(), error = %error_impl, "lexical error");
        Error::new(error_impl, position)
    }

    fn skip_insignificant(&mut self) -> Result<(), Error> {
        loop {
            while self.peek(0).is_some_and(char::is_whitespace) {
                self.advance();
            }

            match (self.peek(0), self.peek(1)) {
                (Some('/'), Some('/')) => {
                    while self.peek(0).is_some_and(|ch| ch != '\n') {
                        self.advance();
                    }
                }
                (Some('/'), Some('*')) => {
                    self.advance_n(2);
                    loop {
                        match (self.peek(0), self.peek(1)) {
                            (None, _) => {
                                return Err(self.fail(ErrorImpl::UnterminatedComment, self.cursor_position()));
                            }
                            (Some('*'), Some('/')) => {
                                self.advance_n(2);
                                break;
                            }
                            _ => self.advance(),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn scan_identifier(&mut self, start: Position) -> Option<Token> {
        let value = IDENTIFIER.find(self.remainder())?.as_str();
        self.advance_over(value);

        let kind = self.keywords.get(value).copied().unwrap_or(TokenKind::Identifier);
        Some(MK_TOKEN!(kind, Some(String::from(value)), start))
    }

    /// `Ok(None)` means the cursor does not start a numeric literal.
    fn scan_number(&mut self, start: Position) -> Result<Option<Token>, Error> {
        let Some(captures) = NUMBER.captures(self.remainder()) else {
            return Ok(None);
        };
        let value = captures.get(0).map_or("", |m| m.as_str());
        let has_exponent = captures.name("exponent").is_some();
        self.advance_over(value);

        if !has_exponent && matches!(self.peek(0), Some('e' | 'E')) {
            let marker = self.peek(0).unwrap_or('e');
            self.advance();
            let literal = format!("{}{}", value, marker);
            return Err(self.fail(ErrorImpl::MalformedExponent { literal }, self.cursor_position()));
        }

        let kind = if has_exponent || value.contains('.') {
            TokenKind::FloatLiteral
        } else {
            TokenKind::IntLiteral
        };

        Ok(Some(MK_TOKEN!(kind, Some(String::from(value)), start)))
    }

    fn scan_operator(&mut self, start: Position) -> Result<Token, Error> {
        let rest = self.remainder();

        for (operator, kind) in TWO_CHAR_OPERATORS {
            if rest.starts_with(operator) {
                self.advance_n(2);
                return Ok(MK_TOKEN!(kind, Some(String::from(operator)), start));
            }
        }

        let ch = self.peek(0).unwrap_or('\0');
        match single_char_kind(ch) {
            Some(kind) => {
                self.advance();
                Ok(MK_TOKEN!(kind, Some(ch.to_string()), start))
            }
            None => Err(self.fail(ErrorImpl::UnrecognizedCharacter { character: ch }, start)),
        }
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_insignificant()?;
        let start = self.cursor_position();

        let token = if self.at_eof() {
            MK_TOKEN!(TokenKind::EOF, None, start)
        } else if let Some(token) = self.scan_identifier(start) {
            token
        } else if let Some(token) = self.scan_number(start)? {
            token
        } else {
            self.scan_operator(start)?
        };

        trace!(kind = %token.kind, value = ?token.value, position = %start, "token");
        Ok(token)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(len = self.source.len()))]
    pub fn scan_all(&mut self) -> Result<Vec<Token>, Error> {
        let mut tokens = vec![];

        loop {
            let token = self.next_token()?;
            let done = token.kind == TokenKind::EOF;
            tokens.push(token);

            if done {
                break;
            }
        }

        debug!(count = tokens.len(), "scan complete");
        Ok(tokens)
    }
}

/// Yields every token up to and including `EOF`, or up to the first error.
impl<'a> Iterator for Scanner<'a> {
    type Item = Result<Token, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        self.finished = result.as_ref().map_or(true, |token| token.kind == TokenKind::EOF);
        Some(result)
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Scanner::new(source).scan_all()
}
