#![allow(dead_code)]

use nginxparser_rs::{Command, Document, dumps, loads};

/// Parse then dump should reproduce `input` exactly.
pub fn roundtrip(input: &str) {
    let doc = loads(input).expect("parse failed");
    let output = dumps(&doc, 4);
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}

/// Helper: dump a tree, parse it back, assert structural equality.
pub fn assert_tree_roundtrip(original: &Document) {
    let dumped = dumps(original, 4);
    let parsed = loads(&dumped).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse dumped output: {e}\n\
             --- dumped ---\n{dumped}"
        )
    });
    assert_eq!(
        original, &parsed,
        "tree mismatch\n--- dumped ---\n{dumped}"
    );
}

pub fn simple(tokens: &[&str]) -> Command {
    Command::Simple(tokens.iter().map(ToString::to_string).collect())
}

pub fn block(header: &[&str], body: Vec<Command>) -> Command {
    Command::Block {
        header: header.iter().map(ToString::to_string).collect(),
        body: Document::from(body),
    }
}
