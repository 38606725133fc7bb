use std::fmt;

use crate::ast::Modifier;
use crate::token::{Span, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Quoted string never closed.
    UnterminatedString { quote: char },
    /// Statement starts with something other than a letter.
    InvalidKey(char),
    /// Character that cannot follow the previous token.
    UnexpectedCharacter(char),
    /// `if`/`location` header with no opening brace.
    UnterminatedHeader { keyword: String },
    /// `if`/`location` with nothing between the keyword and `{`.
    EmptyHeader { keyword: String },
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString { quote } => {
                write!(f, "unterminated quoted string, expected closing {quote}")
            }
            Self::InvalidKey(ch) => {
                write!(f, "directive name must start with a letter, got: {ch}")
            }
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character: {ch}")
            }
            Self::UnterminatedHeader { keyword } => {
                write!(f, "unterminated {keyword} header, expected '{{'")
            }
            Self::EmptyHeader { keyword } => {
                write!(f, "empty {keyword} header")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Tokenize nginx configuration text.
///
/// Comments and whitespace are dropped. The keywords `if` and
/// `location` switch the lexer into header mode, where everything up
/// to the next `{` becomes a single [`TokenKind::Header`] token.
///
/// # Errors
///
/// Returns `LexError` on unterminated strings or headers, directive
/// names that do not start with a letter, and stray characters glued
/// to a preceding token.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

struct Lexer<'a> {
    src: &'a str,
    input: &'a [u8],
    pos: usize,
    line: usize,
    col: usize,
    /// Next word is a directive name.
    at_statement_start: bool,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        let src = input.strip_prefix('\u{FEFF}').unwrap_or(input);
        Self {
            src,
            input: src.as_bytes(),
            pos: 0,
            line: 1,
            col: 1,
            at_statement_start: true,
        }
    }

    fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();
            let Some(ch) = self.peek() else {
                break;
            };

            match ch {
                b'{' => tokens.push(self.read_punct(TokenKind::OpenBrace)),
                b'}' => tokens.push(self.read_punct(TokenKind::CloseBrace)),
                b';' => tokens.push(self.read_punct(TokenKind::Semicolon)),
                _ if self.at_statement_start => self.read_statement_head(&mut tokens)?,
                b'\'' | b'"' => {
                    tokens.push(self.read_quoted_string()?);
                    self.expect_boundary()?;
                }
                _ => tokens.push(self.read_value()),
            }
        }

        Ok(tokens)
    }

    const fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.col,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn peek_char(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(&b) = self.input.get(self.pos) {
            if b == b'\n' {
                self.line += 1;
                self.col = 1;
            } else if !is_continuation_byte(b) {
                self.col += 1;
            }
            self.pos += 1;
        }
    }

    fn advance_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        self.advance_while(is_space);
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            self.skip_whitespace();
            if self.peek() == Some(b'#') {
                self.advance_while(|b| b != b'\n');
            } else {
                break;
            }
        }
    }

    fn read_punct(&mut self, kind: TokenKind) -> Token {
        let span = self.span();
        let text = self.src[self.pos..=self.pos].to_string();
        self.advance();
        self.at_statement_start = true;
        Token { kind, text, span }
    }

    /// Anything after a key or quoted string must be a token
    /// boundary.
    fn expect_boundary(&self) -> Result<(), LexError> {
        match self.peek() {
            None => Ok(()),
            Some(b) if is_space(b) || matches!(b, b';' | b'{' | b'}' | b'#') => Ok(()),
            Some(_) => Err(LexError {
                kind: LexErrorKind::UnexpectedCharacter(self.peek_char().unwrap_or_default()),
                span: self.span(),
            }),
        }
    }

    fn read_statement_head(&mut self, tokens: &mut Vec<Token>) -> Result<(), LexError> {
        self.at_statement_start = false;

        if let Some(keyword) = self.match_header_keyword() {
            let span = self.span();
            for _ in 0..keyword.len() {
                self.advance();
            }
            tokens.push(Token {
                kind: TokenKind::Key,
                text: keyword.to_string(),
                span,
            });
            if keyword == "location" {
                if let Some(modifier) = self.read_modifier() {
                    tokens.push(modifier);
                }
            }
            tokens.push(self.read_header(keyword)?);
            return Ok(());
        }

        let span = self.span();
        let start = self.pos;
        match self.peek() {
            Some(b) if b.is_ascii_alphabetic() => {}
            _ => {
                return Err(LexError {
                    kind: LexErrorKind::InvalidKey(self.peek_char().unwrap_or_default()),
                    span,
                });
            }
        }
        self.advance_while(is_key_byte);

        tokens.push(Token {
            kind: TokenKind::Key,
            text: self.src[start..self.pos].to_string(),
            span,
        });
        self.expect_boundary()
    }

    /// `if` or `location` as a whole keyword at the cursor.
    fn match_header_keyword(&self) -> Option<&'static str> {
        ["if", "location"].into_iter().find(|kw| {
            self.input[self.pos..].starts_with(kw.as_bytes())
                && !self
                    .input
                    .get(self.pos + kw.len())
                    .is_some_and(|&b| b.is_ascii_alphanumeric() || b == b'_' || b == b'$')
        })
    }

    fn read_modifier(&mut self) -> Option<Token> {
        let save = (self.pos, self.line, self.col);
        self.skip_whitespace_and_comments();
        let span = self.span();

        let rest = &self.input[self.pos..];
        if let Some(modifier) = Modifier::ALL
            .into_iter()
            .find(|m| rest.starts_with(m.as_str().as_bytes()))
        {
            for _ in 0..modifier.as_str().len() {
                self.advance();
            }
            return Some(Token {
                kind: TokenKind::Modifier,
                text: modifier.as_str().to_string(),
                span,
            });
        }

        (self.pos, self.line, self.col) = save;
        None
    }

    fn read_header(&mut self, keyword: &str) -> Result<Token, LexError> {
        self.skip_whitespace_and_comments();
        let span = self.span();
        let start = self.pos;
        self.advance_while(|b| b != b'{');

        if self.peek().is_none() {
            return Err(LexError {
                kind: LexErrorKind::UnterminatedHeader {
                    keyword: keyword.to_string(),
                },
                span,
            });
        }
        if self.pos == start {
            return Err(LexError {
                kind: LexErrorKind::EmptyHeader {
                    keyword: keyword.to_string(),
                },
                span,
            });
        }

        Ok(Token {
            kind: TokenKind::Header,
            text: self.src[start..self.pos].to_string(),
            span,
        })
    }

    fn read_quoted_string(&mut self) -> Result<Token, LexError> {
        let span = self.span();
        let start = self.pos;
        let quote = self.input[self.pos];
        self.advance(); // skip opening quote

        self.advance_while(|b| b != quote);
        if self.peek().is_none() {
            return Err(LexError {
                kind: LexErrorKind::UnterminatedString {
                    quote: char::from(quote),
                },
                span,
            });
        }
        self.advance(); // skip closing quote

        Ok(Token {
            kind: TokenKind::QuotedString,
            text: self.src[start..self.pos].to_string(),
            span,
        })
    }

    fn read_value(&mut self) -> Token {
        let span = self.span();
        let start = self.pos;
        self.advance_while(|b| !is_space(b) && !matches!(b, b';' | b'{' | b'}'));

        Token {
            kind: TokenKind::Value,
            text: self.src[start..self.pos].to_string(),
            span,
        }
    }
}

const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

/// Columns count characters, so UTF-8 continuation bytes do not
/// advance them.
const fn is_continuation_byte(b: u8) -> bool {
    b & 0xC0 == 0x80
}

const fn is_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'/'
}
