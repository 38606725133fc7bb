//! Nginx configuration lexer, parser, dumper, and builder.
//!
//! Parses nginx configuration text into a [`Document`] tree of simple
//! and block statements, and dumps such trees back into valid nginx
//! syntax. Comments are dropped while parsing; everything else about a
//! statement (token order, quoting, `if`/`location` headers) is kept
//! verbatim.
//!
//! # Quick start
//!
//! ## Parse and re-dump a config
//!
//! ```
//! use nginxparser_rs::{loads, dumps};
//!
//! let input = "user www-data;\nserver {\n    listen 80;\n}";
//! let doc = loads(input).unwrap();
//! assert_eq!(doc[1].name(), Some("server"));
//! assert_eq!(dumps(&doc, 4), input);
//! ```
//!
//! ## Build a config programmatically
//!
//! ```
//! use nginxparser_rs::{Command, Document, Modifier};
//!
//! let doc = Document::new().command(Command::server(
//!     Document::new()
//!         .command(Command::listen("80"))
//!         .command(Command::location(
//!             Some(Modifier::Exact),
//!             "/health",
//!             Document::new().command(Command::new("return").arg("204")),
//!         )),
//! ));
//!
//! assert!(doc.to_string().contains("location = /health {"));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

pub mod ast;
pub mod builder;
pub mod dumper;
pub mod lexer;
#[cfg(feature = "serde")]
pub mod nested;
pub mod parser;
pub mod token;

use std::fmt;
use std::io::Read;
use std::str::FromStr;

pub use ast::{Command, Document, Modifier};
pub use dumper::{DEFAULT_INDENTATION, dump, dumps};
pub use lexer::{LexError, LexErrorKind, tokenize};
pub use parser::{MAX_DEPTH, ParseError, ParseErrorKind, parse};
pub use token::{Span, Token, TokenKind};

/// Unified error type covering lexing, parsing, and reading input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// Reading or decoding the input failed.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Position of a syntax error, `None` for I/O failures.
    #[must_use]
    pub const fn span(&self) -> Option<Span> {
        match self {
            Self::Lex(e) => Some(e.span),
            Self::Parse(e) => Some(e.span),
            Self::Io(_) => None,
        }
    }
}

/// Tokenize and parse nginx configuration text in one step.
pub fn loads(input: &str) -> Result<Document, Error> {
    let tokens = tokenize(input)?;
    Ok(parse(&tokens)?)
}

/// Read all of `reader` as UTF-8 and parse it.
pub fn load<R: Read>(mut reader: R) -> Result<Document, Error> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    loads(&input)
}

impl FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        loads(s)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&dumps(self, DEFAULT_INDENTATION))
    }
}
