//! Builder tests: build, dump, parse back.

mod common;

use common::assert_tree_roundtrip;
use nginxparser_rs::{Command, Document, Modifier, dumps};

fn tls_site() -> Document {
    Document::new()
        .command(Command::server(
            Document::new()
                .command(Command::listen("80"))
                .command(Command::server_name(&["example.com"]))
                .command(Command::new("return").arg("301").arg("https://$host$request_uri")),
        ))
        .command(Command::server(
            Document::new()
                .command(Command::listen("443").arg("ssl"))
                .command(Command::server_name(&["example.com"]))
                .command(Command::ssl_certificate(
                    "/etc/letsencrypt/live/example.com/fullchain.pem",
                ))
                .command(Command::ssl_certificate_key(
                    "/etc/letsencrypt/live/example.com/privkey.pem",
                ))
                .command(Command::include("/etc/nginx/snippets/ssl-params.conf"))
                .command(Command::location(
                    Some(Modifier::PreferPrefix),
                    "/.well-known/acme-challenge/",
                    Document::new().command(Command::new("root").arg("/var/www/acme")),
                ))
                .command(Command::if_block(
                    "$request_method = 'OPTIONS'",
                    Document::new().command(Command::new("return").arg("204")),
                )),
        ))
}

#[test]
fn build_tls_site_output() {
    let out = dumps(&tls_site(), 4);
    let expected = "\
server {
    listen 80;
    server_name example.com;
    return 301 https://$host$request_uri;
}
server {
    listen 443 ssl;
    server_name example.com;
    ssl_certificate /etc/letsencrypt/live/example.com/fullchain.pem;
    ssl_certificate_key /etc/letsencrypt/live/example.com/privkey.pem;
    include /etc/nginx/snippets/ssl-params.conf;
    location ^~ /.well-known/acme-challenge/ {
        root /var/www/acme;
    }
    if ($request_method = 'OPTIONS') {
        return 204;
    }
}";
    assert_eq!(out, expected);
}

#[test]
fn build_tls_site_roundtrip() {
    assert_tree_roundtrip(&tls_site());
}

#[test]
fn build_every_modifier_roundtrips() {
    for modifier in Modifier::ALL {
        let doc = Document::new().command(Command::location(
            Some(modifier),
            "/x",
            Document::new(),
        ));
        assert_tree_roundtrip(&doc);
    }
}

#[test]
fn build_location_without_modifier() {
    let doc = Document::new().command(Command::location(None, "/", Document::new()));
    assert_eq!(dumps(&doc, 4), "location / {\n}");
    assert_tree_roundtrip(&doc);
}

#[test]
fn build_quoted_arg_roundtrip() {
    let doc = Document::new().command(
        Command::new("add_header")
            .arg("Strict-Transport-Security")
            .quoted_arg("max-age=63072000; includeSubDomains")
            .arg("always"),
    );
    assert_tree_roundtrip(&doc);
}

#[test]
fn build_block_with_arguments() {
    let doc = Document::new().command(
        Command::new("upstream")
            .arg("app")
            .block(Document::new().command(Command::new("server").arg("127.0.0.1:3000"))),
    );
    assert_eq!(dumps(&doc, 4), "upstream app {\n    server 127.0.0.1:3000;\n}");
}
