//! Jupyter notebook model and canonical nbformat v4 writer.
//!
//! This crate provides the in-memory notebook document (cells plus metadata)
//! and serializes it to the on-disk form the reference nbformat writer
//! produces, so any standard-compliant reader can open the output.

pub mod cell;
pub mod notebook;
pub mod writer;

pub use cell::{Cell, CellId, CellKind, Source};
pub use notebook::{KernelSpec, LanguageInfo, Metadata, Notebook, NBFORMAT, NBFORMAT_MINOR};
pub use writer::{from_str, to_string, write, write_file, NotebookError};
