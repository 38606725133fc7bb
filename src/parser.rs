use std::fmt;

use crate::ast::{Command, Document};
use crate::token::{Span, Token, TokenKind};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Token that cannot start a statement (`;` or `{`).
    UnexpectedToken { found: String },
    /// `}` with no open block.
    UnexpectedCloseBrace,
    /// Expected `}`, found end of input.
    ExpectedCloseBrace { found: Option<String> },
    /// Expected `;` or `{` to end a statement.
    ExpectedTerminator { found: Option<String> },
    /// Block opened more than [`MAX_DEPTH`] levels deep.
    NestingTooDeep { limit: usize },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { found } => {
                write!(f, "unexpected '{found}'")
            }
            Self::UnexpectedCloseBrace => {
                write!(f, "unexpected '}}'")
            }
            Self::ExpectedCloseBrace { found: None } => {
                write!(f, "expected '}}'")
            }
            Self::ExpectedCloseBrace { found: Some(t) } => {
                write!(f, "expected '}}', got '{t}'")
            }
            Self::ExpectedTerminator { found: None } => {
                write!(f, "expected ';' or '{{'")
            }
            Self::ExpectedTerminator { found: Some(t) } => {
                write!(f, "expected ';' or '{{', got '{t}'")
            }
            Self::NestingTooDeep { limit } => {
                write!(f, "blocks nested deeper than {limit} levels")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Deepest block nesting the parser accepts.
pub const MAX_DEPTH: usize = 512;

/// Parse a token stream into a [`Document`].
///
/// # Errors
///
/// Returns `ParseError` on unbalanced braces, statements missing their
/// terminator, punctuation where a directive name was expected, or
/// blocks nested more than [`MAX_DEPTH`] levels deep.
pub fn parse(tokens: &[Token]) -> Result<Document, ParseError> {
    Parser::new(tokens).parse()
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn parse(mut self) -> Result<Document, ParseError> {
        let document = self.parse_commands()?;

        // parse_commands only stops early on `}`
        if let Some(token) = self.peek() {
            return Err(ParseError {
                kind: ParseErrorKind::UnexpectedCloseBrace,
                span: token.span,
            });
        }

        Ok(document)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    /// Commands up to end of input or a closing brace, which is left
    /// for the caller.
    fn parse_commands(&mut self) -> Result<Document, ParseError> {
        let mut commands = Vec::new();

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::CloseBrace => break,
                TokenKind::Key => commands.push(self.parse_command()?),
                _ => {
                    return Err(ParseError {
                        kind: ParseErrorKind::UnexpectedToken {
                            found: token.text.clone(),
                        },
                        span: token.span,
                    });
                }
            }
        }

        Ok(Document { commands })
    }

    fn parse_command(&mut self) -> Result<Command, ParseError> {
        let mut words = Vec::new();

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Key
                | TokenKind::Value
                | TokenKind::QuotedString
                | TokenKind::Modifier
                | TokenKind::Header => {
                    words.push(token.text.clone());
                    self.pos += 1;
                }
                TokenKind::Semicolon => {
                    self.pos += 1;
                    return Ok(Command::Simple(words));
                }
                TokenKind::OpenBrace => {
                    if self.depth == MAX_DEPTH {
                        return Err(ParseError {
                            kind: ParseErrorKind::NestingTooDeep { limit: MAX_DEPTH },
                            span: token.span,
                        });
                    }
                    self.pos += 1;
                    self.depth += 1;
                    let body = self.parse_commands()?;
                    self.depth -= 1;
                    self.expect_close_brace()?;
                    return Ok(Command::Block {
                        header: words,
                        body,
                    });
                }
                TokenKind::CloseBrace => {
                    return Err(ParseError {
                        kind: ParseErrorKind::ExpectedTerminator {
                            found: Some(token.text.clone()),
                        },
                        span: token.span,
                    });
                }
            }
        }

        Err(ParseError {
            kind: ParseErrorKind::ExpectedTerminator { found: None },
            span: self.eof_span(),
        })
    }

    fn expect_close_brace(&mut self) -> Result<(), ParseError> {
        match self.peek() {
            Some(token) if token.kind == TokenKind::CloseBrace => {
                self.pos += 1;
                Ok(())
            }
            // parse_commands consumed everything else
            _ => Err(ParseError {
                kind: ParseErrorKind::ExpectedCloseBrace { found: None },
                span: self.eof_span(),
            }),
        }
    }

    fn eof_span(&self) -> Span {
        self.tokens
            .last()
            .map_or(Span { line: 1, column: 1 }, |last| last.span)
    }
}
