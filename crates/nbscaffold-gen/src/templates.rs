//! Fixed content of the five notebook sections.

use nbscaffold_ipynb::CellKind;

use crate::chapters::ChapterDescriptor;

/// A section of a chapter notebook. Each section becomes one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Imports and plotting defaults
    Setup,
    /// Chapter heading and quick-notes prompt
    Notes,
    /// Transcribed code from the book
    Code,
    /// One small experiment
    Experiment,
    /// Short wrap-up
    WrapUp,
}

impl Section {
    /// All sections, in notebook order.
    pub const ALL: [Section; 5] = [
        Self::Setup,
        Self::Notes,
        Self::Code,
        Self::Experiment,
        Self::WrapUp,
    ];

    /// Token used in cell ids.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Setup => "setup",
            Self::Notes => "notes",
            Self::Code => "code",
            Self::Experiment => "experiment",
            Self::WrapUp => "wrap-up",
        }
    }

    pub fn kind(&self) -> CellKind {
        match self {
            Self::Notes | Self::WrapUp => CellKind::Markdown,
            Self::Setup | Self::Code | Self::Experiment => CellKind::Code,
        }
    }

    /// Render the section's cell source for a chapter.
    ///
    /// Only the notes section depends on the chapter.
    pub fn render(&self, chapter: &ChapterDescriptor) -> String {
        match self {
            Self::Setup => SETUP.to_string(),
            Self::Notes => format!("# {}\n\n{}", chapter.heading(), NOTES),
            Self::Code => CODE.to_string(),
            Self::Experiment => EXPERIMENT.to_string(),
            Self::WrapUp => WRAP_UP.to_string(),
        }
    }
}

const SETUP: &str = r#"import numpy as np
import matplotlib.pyplot as plt

%matplotlib inline
plt.rcParams["figure.figsize"] = (8, 5)
plt.rcParams["axes.grid"] = True

print("NumPy version:", np.__version__)"#;

const NOTES: &str = "> Work for this chapter of *Grokking Deep Learning*.

## 1. Quick notes (5–10 bullets, in my own words)

- What is this chapter *really* about?
- Why does it matter?
- Anything surprising or especially clear?

*(Keep this short. 5–10 bullets max.)*";

const CODE: &str = "# 2. Code from the book
#
# Recreate the main code examples from the chapter *by typing*,
# not copy/paste. Keep them as close to the book as is reasonable.

# Example structure:
# def predict(...):
#     ...
#
# def train(...):
#     ...
#
# Your implementations here:";

const EXPERIMENT: &str = "# 3. One tiny experiment (<= 5 minutes)
#
# Pick exactly ONE thing to tweak:
# - Change the learning rate
# - Change the number of epochs
# - Change weight initialization
# - Add debug prints
# - Plot something the book didn't
# - Break something on purpose and see what happens
#
# The goal is *intuition*, not a giant research project.

# Your experiment code here:";

const WRAP_UP: &str = "## 4. 2–3 sentence wrap-up

- What clicked in this chapter?
- What still feels fuzzy?
- What should future-me remember?

*(Keep this to 2–3 sentences.)*";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapters::CHAPTERS;

    #[test]
    fn notes_start_with_heading() {
        let notes = Section::Notes.render(&CHAPTERS[2]);

        assert_eq!(
            notes.lines().next(),
            Some("# Chapter 03 – Neural Prediction & Forward Propagation")
        );
        assert!(notes.contains("## 1. Quick notes"));
    }

    #[test]
    fn other_sections_ignore_chapter() {
        for section in Section::ALL {
            if section == Section::Notes {
                continue;
            }
            assert_eq!(section.render(&CHAPTERS[0]), section.render(&CHAPTERS[15]));
        }
    }

    #[test]
    fn kinds_follow_notebook_layout() {
        let kinds: Vec<_> = Section::ALL.iter().map(Section::kind).collect();

        assert_eq!(
            kinds,
            vec![
                CellKind::Code,
                CellKind::Markdown,
                CellKind::Code,
                CellKind::Code,
                CellKind::Markdown,
            ]
        );
    }

    #[test]
    fn sources_have_no_surrounding_blank_lines() {
        for section in Section::ALL {
            let source = section.render(&CHAPTERS[0]);
            assert_eq!(source.trim(), source, "{:?}", section);
        }
    }
}
