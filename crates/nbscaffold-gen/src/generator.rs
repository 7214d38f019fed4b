//! Build the notebook for a single chapter.

use nbscaffold_ipynb::{Cell, CellId, CellKind, KernelSpec, LanguageInfo, Metadata, Notebook};

use crate::chapters::ChapterDescriptor;
use crate::templates::Section;

/// Build the scaffold notebook for a chapter.
///
/// Pure: the same chapter always yields the same notebook.
pub fn generate(chapter: &ChapterDescriptor) -> Notebook {
    let cells = Section::ALL
        .iter()
        .map(|section| {
            let id = cell_id(chapter, *section);
            let source = section.render(chapter);
            match section.kind() {
                CellKind::Code => Cell::code(id, source),
                CellKind::Markdown => Cell::markdown(id, source),
            }
        })
        .collect();

    Notebook::new(cells, metadata())
}

/// Deterministic cell id, e.g. `ch03-wrap-up`.
fn cell_id(chapter: &ChapterDescriptor, section: Section) -> CellId {
    CellId::new(format!("ch{:02}-{}", chapter.number, section.slug()))
        .expect("chapter cell ids are alphanumeric with dashes")
}

fn metadata() -> Metadata {
    Metadata {
        kernelspec: Some(KernelSpec {
            name: "python3".to_string(),
            display_name: "Python (Grokking DL)".to_string(),
            language: Some("python".to_string()),
        }),
        language_info: Some(LanguageInfo {
            name: "python".to_string(),
        }),
        ..Default::default()
    }
}
