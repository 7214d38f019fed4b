//! Notebook cells.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::writer::NotebookError;

/// Maximum length of a cell id (nbformat 4.5).
const MAX_ID_LEN: usize = 64;

/// Identifier of a cell, unique within a notebook.
///
/// Must be 1-64 characters of `[A-Za-z0-9_-]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CellId(String);

impl CellId {
    /// Create a cell id, validating its characters and length.
    pub fn new(id: impl Into<String>) -> Result<Self, NotebookError> {
        let id = id.into();
        let valid = !id.is_empty()
            && id.len() <= MAX_ID_LEN
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if valid {
            Ok(Self(id))
        } else {
            Err(NotebookError::InvalidCellId(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CellId {
    type Error = NotebookError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CellId> for String {
    fn from(id: CellId) -> Self {
        id.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Multi-line cell text.
///
/// Stored on disk as an array of lines, each keeping its trailing newline,
/// and accepted back either as that array or as a single string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Source(String);

impl Source {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into lines, keeping line endings.
    pub fn lines(&self) -> Vec<&str> {
        self.0.split_inclusive('\n').collect()
    }
}

impl Serialize for Source {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.lines())
    }
}

impl<'de> Deserialize<'de> for Source {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Lines(Vec<String>),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(text) => Self(text),
            Repr::Lines(lines) => Self(lines.concat()),
        })
    }
}

/// Kind of a cell, without its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Code,
    Markdown,
}

/// A single notebook cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
pub enum Cell {
    /// Executable code
    Code {
        id: CellId,
        #[serde(default)]
        metadata: Map<String, Value>,
        execution_count: Option<u32>,
        source: Source,
        #[serde(default)]
        outputs: Vec<Value>,
    },

    /// Narrative markdown
    Markdown {
        id: CellId,
        #[serde(default)]
        metadata: Map<String, Value>,
        source: Source,
    },
}

impl Cell {
    /// Create an unexecuted code cell.
    pub fn code(id: CellId, source: impl Into<String>) -> Self {
        Self::Code {
            id,
            metadata: Map::new(),
            execution_count: None,
            source: Source::new(source),
            outputs: Vec::new(),
        }
    }

    /// Create a markdown cell.
    pub fn markdown(id: CellId, source: impl Into<String>) -> Self {
        Self::Markdown {
            id,
            metadata: Map::new(),
            source: Source::new(source),
        }
    }

    pub fn kind(&self) -> CellKind {
        match self {
            Self::Code { .. } => CellKind::Code,
            Self::Markdown { .. } => CellKind::Markdown,
        }
    }

    pub fn id(&self) -> &CellId {
        match self {
            Self::Code { id, .. } | Self::Markdown { id, .. } => id,
        }
    }

    pub fn source(&self) -> &str {
        match self {
            Self::Code { source, .. } | Self::Markdown { source, .. } => source.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_ids() {
        assert!(CellId::new("ch03-setup").is_ok());
        assert!(CellId::new("a_B-9").is_ok());
        assert!(CellId::new("x".repeat(64)).is_ok());
    }

    #[test]
    fn rejects_invalid_ids() {
        assert!(matches!(
            CellId::new(""),
            Err(NotebookError::InvalidCellId(_))
        ));
        assert!(CellId::new("has space").is_err());
        assert!(CellId::new("dot.ted").is_err());
        assert!(CellId::new("x".repeat(65)).is_err());
    }

    #[test]
    fn splits_source_keeping_line_endings() {
        let source = Source::new("a\n\nb\n");
        assert_eq!(source.lines(), vec!["a\n", "\n", "b\n"]);

        let source = Source::new("last line has no newline\nend");
        assert_eq!(source.lines(), vec!["last line has no newline\n", "end"]);
    }

    #[test]
    fn empty_source_has_no_lines() {
        assert!(Source::default().lines().is_empty());
    }

    #[test]
    fn reads_source_as_string_or_lines() {
        let from_lines: Source = serde_json::from_str(r#"["a\n", "b"]"#).unwrap();
        let from_text: Source = serde_json::from_str(r#""a\nb""#).unwrap();

        assert_eq!(from_lines, from_text);
        assert_eq!(from_lines.as_str(), "a\nb");
    }

    #[test]
    fn reports_kind_and_source() {
        let id = CellId::new("c1").unwrap();
        let code = Cell::code(id.clone(), "x = 1");
        let md = Cell::markdown(id, "# Title");

        assert_eq!(code.kind(), CellKind::Code);
        assert_eq!(md.kind(), CellKind::Markdown);
        assert_eq!(code.source(), "x = 1");
        assert_eq!(md.id().as_str(), "c1");
    }
}
