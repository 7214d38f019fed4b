//! The fixed chapter catalog.

/// Extension of generated notebook files.
pub const EXTENSION: &str = "ipynb";

/// One chapter of the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterDescriptor {
    /// Chapter number (1-based)
    pub number: u32,

    /// Filename-safe lowercase token
    pub slug: &'static str,

    /// Short human-readable title
    pub title: &'static str,
}

impl ChapterDescriptor {
    pub const fn new(number: u32, slug: &'static str, title: &'static str) -> Self {
        Self {
            number,
            slug,
            title,
        }
    }

    /// File name of this chapter's notebook (e.g. `ch03-neural-prediction.ipynb`).
    pub fn file_name(&self) -> String {
        format!("ch{:02}-{}.{}", self.number, self.slug, EXTENSION)
    }

    /// Heading shown at the top of the notes cell.
    pub fn heading(&self) -> String {
        format!("Chapter {:02} – {}", self.number, self.title)
    }
}

/// Chapters of *Grokking Deep Learning*, in book order.
///
/// Titles are paraphrased from the book.
pub const CHAPTERS: [ChapterDescriptor; 16] = [
    ChapterDescriptor::new(
        1,
        "intro-to-deep-learning-motivation",
        "Intro to Deep Learning & Motivation",
    ),
    ChapterDescriptor::new(
        2,
        "fundamental-concepts-of-learning",
        "Fundamental Concepts of Learning",
    ),
    ChapterDescriptor::new(
        3,
        "neural-prediction-forward-propagation",
        "Neural Prediction & Forward Propagation",
    ),
    ChapterDescriptor::new(
        4,
        "neural-learning-gradient-descent",
        "Neural Learning & Gradient Descent",
    ),
    ChapterDescriptor::new(
        5,
        "learning-multiple-weights-generalized-gd",
        "Learning Multiple Weights (Generalized GD)",
    ),
    ChapterDescriptor::new(
        6,
        "first-deep-network-backpropagation",
        "Building Your First Deep Network & Backprop",
    ),
    ChapterDescriptor::new(
        7,
        "visualizing-reasoning-about-networks",
        "Visualizing & Reasoning About Networks",
    ),
    ChapterDescriptor::new(
        8,
        "regularization-batching-learning-signal",
        "Regularization, Batching & Learning Signal",
    ),
    ChapterDescriptor::new(
        9,
        "nonlinearities-activation-functions",
        "Nonlinearities & Activation Functions",
    ),
    ChapterDescriptor::new(
        10,
        "intro-to-convolutional-neural-networks",
        "Intro to Convolutional Neural Networks",
    ),
    ChapterDescriptor::new(
        11,
        "word-vectors-simple-language-models",
        "Word Vectors & Simple Language Models",
    ),
    ChapterDescriptor::new(
        12,
        "recurrent-nets-for-sequence-data",
        "Recurrent Nets for Sequence Data",
    ),
    ChapterDescriptor::new(
        13,
        "building-a-small-deep-learning-framework",
        "Building a Small Deep Learning Framework",
    ),
    ChapterDescriptor::new(14, "lstms-sequence-modeling", "LSTMs & Sequence Modeling"),
    ChapterDescriptor::new(
        15,
        "federated-distributed-deep-learning",
        "Federated / Distributed Deep Learning",
    ),
    ChapterDescriptor::new(16, "where-to-go-next", "Where to Go Next"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn numbers_are_sequential_from_one() {
        for (i, chapter) in CHAPTERS.iter().enumerate() {
            assert_eq!(chapter.number as usize, i + 1);
        }
    }

    #[test]
    fn slugs_are_unique_and_filename_safe() {
        let slugs: HashSet<_> = CHAPTERS.iter().map(|c| c.slug).collect();
        assert_eq!(slugs.len(), CHAPTERS.len());

        for chapter in &CHAPTERS {
            assert!(chapter
                .slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        }
    }

    #[test]
    fn derives_file_names() {
        assert_eq!(
            CHAPTERS[0].file_name(),
            "ch01-intro-to-deep-learning-motivation.ipynb"
        );
        assert_eq!(CHAPTERS[15].file_name(), "ch16-where-to-go-next.ipynb");
    }

    #[test]
    fn pads_heading_number() {
        assert_eq!(
            CHAPTERS[2].heading(),
            "Chapter 03 – Neural Prediction & Forward Propagation"
        );
        assert_eq!(CHAPTERS[9].heading(), "Chapter 10 – Intro to Convolutional Neural Networks");
    }
}
