//! Tree accessors and in-place editing.

mod common;

use common::{block, simple};
use nginxparser_rs::{Command, Document, dumps, loads};

const SITE: &str = "\
server {
    listen 80;
    server_name example.com;
    location / {
        root /var/www;
    }
}
server {
    listen 8080;
}";

#[test]
fn name_and_args() {
    let cmd = simple(&["server_name", "a.com", "b.com"]);
    assert_eq!(cmd.name(), Some("server_name"));
    assert_eq!(cmd.args(), ["a.com", "b.com"]);
    assert!(!cmd.is_block());
    assert!(cmd.body().is_none());
}

#[test]
fn block_accessors() {
    let cmd = block(&["location", "/ "], vec![simple(&["root", "/var/www"])]);
    assert!(cmd.is_block());
    assert_eq!(cmd.args(), ["/ "]);
    assert_eq!(cmd.body().map(Document::len), Some(1));
}

#[test]
fn empty_command_has_no_name() {
    let cmd = Command::Simple(Vec::new());
    assert_eq!(cmd.name(), None);
    assert!(cmd.args().is_empty());
}

#[test]
fn find_direct_children() {
    let doc = loads(SITE).unwrap();
    assert_eq!(doc.find("server").count(), 2);
    assert_eq!(doc.find("listen").count(), 0);

    let first = doc.find("server").next().unwrap().body().unwrap();
    let listens: Vec<_> = first.find("listen").map(Command::args).collect();
    assert_eq!(listens, [["80"]]);
}

#[test]
fn edit_then_dump() {
    let mut doc = loads(SITE).unwrap();

    for server in doc.find_mut("server") {
        let body = server.body_mut().unwrap();
        for listen in body.find_mut("listen") {
            listen.tokens_mut().push("ssl".to_string());
        }
        body.push(Command::new("ssl_certificate").arg("/etc/ssl/cert.pem"));
    }

    let out = dumps(&doc, 4);
    assert!(out.contains("    listen 80 ssl;\n"));
    assert!(out.contains("    listen 8080 ssl;\n    ssl_certificate /etc/ssl/cert.pem;\n}"));
}

#[test]
fn remove_commands() {
    let mut doc = loads(SITE).unwrap();
    doc.commands.retain(|c| c.args().is_empty() && c.body().is_some_and(|b| b.len() > 1));
    assert_eq!(doc.len(), 1);
}

#[test]
fn iterate_and_collect() {
    let doc = loads("a 1;\nb 2;\nc 3;").unwrap();
    let names: Vec<_> = doc.iter().filter_map(Command::name).collect();
    assert_eq!(names, ["a", "b", "c"]);

    let kept: Document = doc.into_iter().filter(|c| c.name() != Some("b")).collect();
    assert_eq!(dumps(&kept, 4), "a 1;\nc 3;");
}

#[test]
fn display_uses_default_indentation() {
    let doc = loads(SITE).unwrap();
    assert_eq!(doc.to_string(), SITE);
}
