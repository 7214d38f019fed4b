//! Canonical nbformat v4 serialization.
//!
//! Output matches the reference writer byte for byte: keys sorted, one-space
//! indentation, non-ASCII written as UTF-8, cell sources split into line
//! arrays, and a single trailing newline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::notebook::{Notebook, NBFORMAT};

/// Errors that can occur when reading or writing notebooks.
#[derive(Debug, thiserror::Error)]
pub enum NotebookError {
    #[error("Invalid cell id {0:?}: expected 1-64 characters of [A-Za-z0-9_-]")]
    InvalidCellId(String),

    #[error("Failed to serialize notebook: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to parse notebook: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Unsupported nbformat version {0}")]
    UnsupportedVersion(u32),

    #[error("Failed to write notebook: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Serialize a notebook into any writer.
pub fn write<W: Write>(notebook: &Notebook, mut writer: W) -> Result<(), NotebookError> {
    // Going through Value sorts object keys.
    let value = serde_json::to_value(notebook)?;

    let formatter = PrettyFormatter::with_indent(b" ");
    let mut ser = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value.serialize(&mut ser)?;

    writer.write_all(b"\n")?;
    Ok(())
}

/// Serialize a notebook to a string.
pub fn to_string(notebook: &Notebook) -> Result<String, NotebookError> {
    let mut buf = Vec::new();
    write(notebook, &mut buf)?;

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Create (or truncate) `path` and write the notebook to it.
pub fn write_file(notebook: &Notebook, path: &Path) -> Result<(), NotebookError> {
    let io_err = |source| NotebookError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);

    write(notebook, &mut writer).map_err(|e| match e {
        NotebookError::Io(source) => io_err(source),
        NotebookError::Serialize(e) if e.is_io() => io_err(e.into()),
        other => other,
    })?;

    writer.flush().map_err(io_err)
}

/// Parse a notebook from its JSON text.
pub fn from_str(s: &str) -> Result<Notebook, NotebookError> {
    let notebook: Notebook = serde_json::from_str(s).map_err(NotebookError::Parse)?;

    if notebook.nbformat != NBFORMAT {
        return Err(NotebookError::UnsupportedVersion(notebook.nbformat));
    }

    Ok(notebook)
}
