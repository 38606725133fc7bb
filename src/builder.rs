use crate::ast::{Command, Document, Modifier};

impl Document {
    /// Create a new empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Add a command.
    #[must_use]
    pub fn command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }
}

impl Command {
    /// Create a simple statement with the given directive name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::Simple(vec![name.to_string()])
    }

    /// Add an unquoted argument (to the header, for blocks).
    #[must_use]
    pub fn arg(mut self, value: &str) -> Self {
        self.tokens_mut().push(value.to_string());
        self
    }

    /// Add a double-quoted argument. `value` is wrapped as is, with no
    /// escaping.
    #[must_use]
    pub fn quoted_arg(mut self, value: &str) -> Self {
        self.tokens_mut().push(format!("\"{value}\""));
        self
    }

    /// Turn this command into a block with the given body.
    #[must_use]
    pub fn block(self, body: Document) -> Self {
        let header = match self {
            Self::Simple(tokens) => tokens,
            Self::Block { header, .. } => header,
        };
        Self::Block { header, body }
    }

    /// `if (condition) { ... }`. The condition is stored as the opaque
    /// header the parser would produce, parentheses and trailing space
    /// included.
    #[must_use]
    pub fn if_block(condition: &str, body: Document) -> Self {
        Self::Block {
            header: vec!["if".to_string(), format!("({condition}) ")],
            body,
        }
    }

    /// `location [modifier] pattern { ... }`.
    #[must_use]
    pub fn location(modifier: Option<Modifier>, pattern: &str, body: Document) -> Self {
        let mut header = vec!["location".to_string()];
        if let Some(m) = modifier {
            header.push(m.as_str().to_string());
        }
        header.push(format!("{pattern} "));
        Self::Block { header, body }
    }

    /// `server { ... }`.
    #[must_use]
    pub fn server(body: Document) -> Self {
        Self::new("server").block(body)
    }

    /// `listen <port>;`
    #[must_use]
    pub fn listen(port: &str) -> Self {
        Self::new("listen").arg(port)
    }

    /// `server_name <names...>;`
    #[must_use]
    pub fn server_name(names: &[&str]) -> Self {
        names
            .iter()
            .fold(Self::new("server_name"), |cmd, name| cmd.arg(name))
    }

    /// `ssl_certificate <path>;`
    #[must_use]
    pub fn ssl_certificate(path: &str) -> Self {
        Self::new("ssl_certificate").arg(path)
    }

    /// `ssl_certificate_key <path>;`
    #[must_use]
    pub fn ssl_certificate_key(path: &str) -> Self {
        Self::new("ssl_certificate_key").arg(path)
    }

    /// `include <path>;`
    #[must_use]
    pub fn include(path: &str) -> Self {
        Self::new("include").arg(path)
    }
}
