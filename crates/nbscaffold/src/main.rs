//! nbscaffold CLI - scaffold one Jupyter notebook per book chapter.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "nbscaffold")]
#[command(about = "Generate scaffolded Jupyter notebooks for each chapter")]
#[command(version)]
pub struct Cli {
    /// Output directory (defaults to notebooks/ in the project root)
    ///
    /// The default is fixed at build time; pass this when the binary runs
    /// away from its source tree.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the run report
    fmt()
        .with_env_filter(log_filter(cli.verbose))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    commands::generate::run(cli.output)
}

/// Log filter from the verbose flag alone.
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn runs_without_arguments() {
        let cli = Cli::try_parse_from(["nbscaffold"]).unwrap();

        assert!(cli.output.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn accepts_output_override() {
        let cli = Cli::try_parse_from(["nbscaffold", "-v", "--output", "out/nb"]).unwrap();

        assert_eq!(cli.output, Some(PathBuf::from("out/nb")));
        assert!(cli.verbose);
    }

    #[test]
    fn log_level_ignores_environment() {
        std::env::set_var("RUST_LOG", "trace");

        assert_eq!(log_filter(false).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(log_filter(true).max_level_hint(), Some(LevelFilter::DEBUG));

        std::env::remove_var("RUST_LOG");
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["nbscaffold", "extra"]).is_err());
    }
}
