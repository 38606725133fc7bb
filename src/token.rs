/// Source location for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Directive name at the start of a statement.
    Key,
    /// Unquoted argument.
    Value,
    /// Single- or double-quoted string, delimiters included.
    QuotedString,
    /// Location match modifier (`=`, `~*`, `~`, `^~`).
    Modifier,
    /// Raw `if`/`location` header text up to the opening brace.
    Header,
    /// Opening brace `{`.
    OpenBrace,
    /// Closing brace `}`.
    CloseBrace,
    /// Statement terminator `;`.
    Semicolon,
}

/// A single token with its kind, text, and source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}
