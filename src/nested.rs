//! Nested-list representation behind the `serde` feature.
//!
//! A [`Document`] is a sequence of commands, and a [`Command`] is a
//! sequence of strings whose last element may be a nested document:
//!
//! ```json
//! [["user", "www-data"], ["server", [["listen", "80"]]]]
//! ```

use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ast::{Command, Document};

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Simple(tokens) => tokens.serialize(serializer),
            Self::Block { header, body } => {
                let mut seq = serializer.serialize_seq(Some(header.len() + 1))?;
                for token in header {
                    seq.serialize_element(token)?;
                }
                seq.serialize_element(body)?;
                seq.end()
            }
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Element {
    Token(String),
    Body(Document),
}

struct CommandVisitor;

impl<'de> Visitor<'de> for CommandVisitor {
    type Value = Command;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a list of strings, optionally ending in a nested list of commands")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Command, A::Error> {
        let mut tokens = Vec::new();
        let mut body = None;

        while let Some(element) = seq.next_element::<Element>()? {
            if body.is_some() {
                return Err(de::Error::custom("block body must be the last element"));
            }
            match element {
                Element::Token(token) => tokens.push(token),
                Element::Body(doc) => body = Some(doc),
            }
        }

        if tokens.is_empty() {
            return Err(de::Error::custom("command needs at least one token"));
        }

        Ok(match body {
            Some(body) => Command::Block {
                header: tokens,
                body,
            },
            None => Command::Simple(tokens),
        })
    }
}

impl<'de> Deserialize<'de> for Command {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(CommandVisitor)
    }
}
