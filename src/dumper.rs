//! Pretty-printer that serializes a [`Document`] back into nginx syntax.
//!
//! Produces space-indented output, one statement per line, with no
//! trailing newline.

use std::io::{self, Write};

use crate::ast::{Command, Document};

/// Indentation width used by [`Document`]'s `Display` impl.
pub const DEFAULT_INDENTATION: usize = 4;

/// Render a `Document` as nginx configuration text.
///
/// Each nesting level is indented by `indentation` spaces. Tokens are
/// written verbatim, so quoted strings keep their original quotes and
/// embedded newlines.
///
/// # Panics
///
/// Panics if any command has no tokens, or a block has an empty
/// header. Output recurses once per nesting level; trees from
/// [`crate::parse`] stay within [`crate::parser::MAX_DEPTH`].
#[must_use]
pub fn dumps(document: &Document, indentation: usize) -> String {
    let mut out = String::new();
    dump_commands(&mut out, document, indentation, 0);
    out
}

/// Render a `Document` into `writer`.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn dump<W: Write>(document: &Document, mut writer: W, indentation: usize) -> io::Result<()> {
    writer.write_all(dumps(document, indentation).as_bytes())?;
    writer.flush()
}

fn dump_commands(out: &mut String, document: &Document, indentation: usize, level: usize) {
    for (i, command) in document.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        dump_command(out, command, indentation, level);
    }
}

fn dump_command(out: &mut String, command: &Command, indentation: usize, level: usize) {
    let tokens = command.tokens();
    assert!(
        !tokens.is_empty(),
        "malformed command: a command needs at least one token"
    );

    let prefix = " ".repeat(indentation * level);
    out.push_str(&prefix);
    out.push_str(&tokens.join(" "));

    match command {
        Command::Simple(_) => out.push(';'),
        Command::Block { body, .. } => {
            // opaque headers already end in whitespace
            if !tokens.last().is_some_and(|t| t.ends_with(char::is_whitespace)) {
                out.push(' ');
            }
            out.push_str("{\n");
            if !body.is_empty() {
                dump_commands(out, body, indentation, level + 1);
                out.push('\n');
            }
            out.push_str(&prefix);
            out.push('}');
        }
    }
}
