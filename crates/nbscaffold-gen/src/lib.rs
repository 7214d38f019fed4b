//! Notebook scaffolding for *Grokking Deep Learning*.
//!
//! Builds one Jupyter notebook per chapter from fixed templates and writes
//! them into an output directory, leaving any existing notebook untouched.

pub mod chapters;
pub mod generator;
pub mod scaffold;
pub mod templates;

pub use chapters::{ChapterDescriptor, CHAPTERS, EXTENSION};
pub use generator::generate;
pub use scaffold::{
    ChapterOutcome, ChapterStatus, RunReport, ScaffoldConfig, ScaffoldError, Scaffolder,
};
pub use templates::Section;
