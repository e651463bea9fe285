use std::fmt;
use std::path::PathBuf;

/// Single-letter tag classification, following the exuberant-ctags
/// convention used by JavaScript tag files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Variable bound to a `require(...)` import.
    Import,
    /// Function declaration whose name has an uppercase lead.
    Constructor,
    /// Ordinary function declaration.
    Function,
    /// Function-valued property of an object-literal binding.
    Method,
}

impl TagKind {
    pub fn letter(self) -> char {
        match self {
            TagKind::Import => 'i',
            TagKind::Constructor => 'c',
            TagKind::Function => 'f',
            TagKind::Method => 'm',
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One emitted tag: a symbol name mapped to its defining location.
///
/// Created once per recognized construct and never mutated afterwards.
/// The `lineno` field is always stored as the bare 1-based line number;
/// the renderer adds the `lineno:` prefix uniformly for every kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Identifier, possibly dotted (`Owner.method`) for method tags.
    pub name: String,
    /// Source file that produced the tag.
    pub file: PathBuf,
    /// Locate-pattern: zero-based line offset plus a whole-word match
    /// on the name's terminal segment.
    pub address: String,
    pub kind: TagKind,
    /// 1-based source line. Always `address`'s embedded offset plus one.
    pub lineno: u32,
}

impl Tag {
    pub fn new(
        name: impl Into<String>,
        file: impl Into<PathBuf>,
        address: impl Into<String>,
        kind: TagKind,
        lineno: u32,
    ) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            address: address.into(),
            kind,
            lineno,
        }
    }

    /// Rendered tab-separated form, one output line per tag.
    pub fn render(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}:{}",
            self.name,
            self.file.display(),
            self.address,
            self.kind,
            "lineno",
            self.lineno
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Build the locate-pattern for an identifier starting on the given
/// zero-based row (tree-sitter's native convention).
///
/// The pattern pairs the line offset with a whole-word match so a
/// consuming editor can still find the symbol after line numbers drift.
pub fn locate_pattern(row: usize, identifier: &str) -> String {
    format!("{row}/\\<{identifier}\\>/;\"")
}
