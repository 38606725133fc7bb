use std::ops::Deref;

/// Ordered sequence of commands: a whole config file or a block body.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Document {
    pub commands: Vec<Command>,
}

/// A single directive.
///
/// Tokens are kept verbatim: quoted strings carry their quote
/// characters and `if`/`location` headers are one opaque token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `name arg...;`
    Simple(Vec<String>),
    /// `name arg... { body }`
    Block { header: Vec<String>, body: Document },
}

/// Location match modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    /// `=`
    Exact,
    /// `~*`
    CaseInsensitiveRegex,
    /// `~`
    Regex,
    /// `^~`
    PreferPrefix,
}

impl Modifier {
    /// All modifiers in matching order. `~*` precedes `~` because
    /// `~` is a prefix of it.
    pub const ALL: [Self; 4] = [
        Self::Exact,
        Self::CaseInsensitiveRegex,
        Self::Regex,
        Self::PreferPrefix,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "=",
            Self::CaseInsensitiveRegex => "~*",
            Self::Regex => "~",
            Self::PreferPrefix => "^~",
        }
    }
}

impl Document {
    /// Number of top-level commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }

    /// Append a command in place.
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Direct children whose name equals `name`. Does not recurse.
    pub fn find<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Command> + 'a {
        self.commands
            .iter()
            .filter(move |c| c.name() == Some(name))
    }

    /// Mutable variant of [`Document::find`].
    pub fn find_mut<'a>(&'a mut self, name: &'a str) -> impl Iterator<Item = &'a mut Command> + 'a {
        self.commands
            .iter_mut()
            .filter(move |c| c.name() == Some(name))
    }
}

impl Deref for Document {
    type Target = [Command];

    fn deref(&self) -> &[Command] {
        &self.commands
    }
}

impl From<Vec<Command>> for Document {
    fn from(commands: Vec<Command>) -> Self {
        Self { commands }
    }
}

impl FromIterator<Command> for Document {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Document {
    type Item = Command;
    type IntoIter = std::vec::IntoIter<Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Command;
    type IntoIter = std::slice::Iter<'a, Command>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl Command {
    /// Tokens of a simple statement, or the header of a block.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        match self {
            Self::Simple(tokens) => tokens,
            Self::Block { header, .. } => header,
        }
    }

    /// Mutable access to the statement tokens or block header.
    pub fn tokens_mut(&mut self) -> &mut Vec<String> {
        match self {
            Self::Simple(tokens) => tokens,
            Self::Block { header, .. } => header,
        }
    }

    /// Directive name, `None` only for a malformed empty command.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.tokens().first().map(String::as_str)
    }

    /// Tokens after the name.
    #[must_use]
    pub fn args(&self) -> &[String] {
        self.tokens().get(1..).unwrap_or_default()
    }

    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self, Self::Block { .. })
    }

    #[must_use]
    pub const fn body(&self) -> Option<&Document> {
        match self {
            Self::Simple(_) => None,
            Self::Block { body, .. } => Some(body),
        }
    }

    pub fn body_mut(&mut self) -> Option<&mut Document> {
        match self {
            Self::Simple(_) => None,
            Self::Block { body, .. } => Some(body),
        }
    }
}
