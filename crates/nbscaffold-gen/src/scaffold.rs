//! Write chapter notebooks to disk, skipping ones that already exist.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use nbscaffold_ipynb::NotebookError;

use crate::chapters::{ChapterDescriptor, CHAPTERS};
use crate::generator::generate;

/// Configuration for a scaffolding run.
#[derive(Debug, Clone)]
pub struct ScaffoldConfig {
    /// Directory notebooks are written to (created if missing)
    pub output_dir: PathBuf,
}

/// What happened to one chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterStatus {
    /// A notebook was written
    Created,
    /// A file was already at the path and was left alone
    Skipped,
}

/// Outcome for a single chapter.
#[derive(Debug, Clone)]
pub struct ChapterOutcome {
    pub number: u32,
    pub file_name: String,
    pub path: PathBuf,
    pub status: ChapterStatus,
}

/// Result of a scaffolding run.
#[derive(Debug)]
pub struct RunReport {
    /// Per-chapter outcomes, in chapter order
    pub outcomes: Vec<ChapterOutcome>,

    /// Total run time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

impl RunReport {
    pub fn created(&self) -> usize {
        self.count(ChapterStatus::Created)
    }

    pub fn skipped(&self) -> usize {
        self.count(ChapterStatus::Skipped)
    }

    fn count(&self, status: ChapterStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }
}

/// Errors that abort a scaffolding run.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write notebook {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: NotebookError,
    },
}

/// Writes one notebook per chapter into the output directory.
pub struct Scaffolder {
    config: ScaffoldConfig,
}

impl Scaffolder {
    /// Create a scaffolder over the book's chapters.
    pub fn new(config: ScaffoldConfig) -> Self {
        Self { config }
    }

    /// Run a full pass.
    ///
    /// `on_outcome` is called after each chapter, so progress is visible even
    /// if a later chapter fails. Files written before a failure are kept.
    pub fn run(
        &self,
        mut on_outcome: impl FnMut(&ChapterOutcome),
    ) -> Result<RunReport, ScaffoldError> {
        let start = Instant::now();
        let output_dir = &self.config.output_dir;

        fs::create_dir_all(output_dir).map_err(|source| ScaffoldError::CreateDir {
            path: output_dir.clone(),
            source,
        })?;
        tracing::debug!("Output directory: {}", output_dir.display());

        let mut outcomes = Vec::with_capacity(CHAPTERS.len());
        for chapter in &CHAPTERS {
            let outcome = self.scaffold_chapter(chapter)?;
            on_outcome(&outcome);
            outcomes.push(outcome);
        }

        Ok(RunReport {
            outcomes,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: output_dir.clone(),
        })
    }

    fn scaffold_chapter(
        &self,
        chapter: &ChapterDescriptor,
    ) -> Result<ChapterOutcome, ScaffoldError> {
        let file_name = chapter.file_name();
        let path = self.config.output_dir.join(&file_name);

        let status = if path.exists() {
            tracing::debug!("{} exists, leaving it alone", path.display());
            ChapterStatus::Skipped
        } else {
            let notebook = generate(chapter);
            nbscaffold_ipynb::write_file(&notebook, &path).map_err(|source| {
                ScaffoldError::Write {
                    path: path.clone(),
                    source,
                }
            })?;
            tracing::debug!("Wrote {}", path.display());
            ChapterStatus::Created
        };

        Ok(ChapterOutcome {
            number: chapter.number,
            file_name,
            path,
            status,
        })
    }
}
