//! Generate chapter notebooks.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nbscaffold_gen::{ChapterOutcome, ChapterStatus, ScaffoldConfig, Scaffolder};

const DONE_MESSAGE: &str = "Done. Open these in VS Code or JupyterLab and go chapter by chapter.";

/// `notebooks/` in the project root this binary was built from.
pub fn default_output_dir() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    // crates/nbscaffold -> project root
    manifest_dir
        .ancestors()
        .nth(2)
        .unwrap_or(manifest_dir)
        .join("notebooks")
}

/// Console line for one chapter.
pub fn outcome_line(outcome: &ChapterOutcome) -> String {
    match outcome.status {
        ChapterStatus::Created => format!("Created: {}", outcome.file_name),
        ChapterStatus::Skipped => format!("Skipping existing notebook: {}", outcome.file_name),
    }
}

/// Build the run config from the `--output` flag.
fn scaffold_config(output: Option<PathBuf>) -> ScaffoldConfig {
    ScaffoldConfig {
        output_dir: output.unwrap_or_else(default_output_dir),
    }
}

/// Run the generate command.
pub fn run(output: Option<PathBuf>) -> Result<()> {
    let config = scaffold_config(output);
    tracing::debug!("Scaffolding notebooks into {}", config.output_dir.display());

    let report = Scaffolder::new(config)
        .run(|outcome| println!("{}", outcome_line(outcome)))
        .context("Failed to generate notebooks")?;

    println!("\n{}", DONE_MESSAGE);

    tracing::debug!(
        "Created {} and skipped {} notebooks in {}ms",
        report.created(),
        report.skipped(),
        report.duration_ms
    );

    Ok(())
}
