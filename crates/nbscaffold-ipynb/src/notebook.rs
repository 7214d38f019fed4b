//! Notebook document and metadata.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cell::Cell;

/// Major format version written by this crate.
pub const NBFORMAT: u32 = 4;

/// Minor format version written by this crate (cell ids are required from 4.5).
pub const NBFORMAT_MINOR: u32 = 5;

/// Kernel the notebook should be opened with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelSpec {
    /// Kernel name (e.g. `python3`)
    pub name: String,

    /// Name shown in the kernel picker
    pub display_name: String,

    /// Language the kernel runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Language information for syntax highlighting and export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageInfo {
    pub name: String,
}

/// Notebook-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernelspec: Option<KernelSpec>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_info: Option<LanguageInfo>,

    /// Any other metadata keys, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A notebook: an ordered list of cells plus metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notebook {
    pub cells: Vec<Cell>,
    pub metadata: Metadata,
    pub nbformat: u32,
    pub nbformat_minor: u32,
}

impl Notebook {
    /// Create a notebook at the current format version.
    pub fn new(cells: Vec<Cell>, metadata: Metadata) -> Self {
        Self {
            cells,
            metadata,
            nbformat: NBFORMAT,
            nbformat_minor: NBFORMAT_MINOR,
        }
    }
}
