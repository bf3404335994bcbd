//! Content sources for files created or replaced without a request body

use rand::seq::SliceRandom;
use rand::Rng;

/// Produces text for a file when the caller supplied none
pub trait ContentSource: Send + Sync {
    /// Generate non-empty text
    fn generate(&self) -> String;
}

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum", "porro", "quisquam",
    "numquam", "modi", "tempora", "quaerat", "neque", "etincidunt", "magnam", "dolorem",
];

/// Lorem-style filler: paragraphs of random sentences, newline terminated
#[derive(Debug, Clone)]
pub struct LoremFiller {
    paragraphs: usize,
}

impl LoremFiller {
    pub fn new(paragraphs: usize) -> Self {
        Self {
            paragraphs: paragraphs.max(1),
        }
    }

    fn sentence<R: Rng>(rng: &mut R) -> String {
        let length = rng.gen_range(4..=12);
        let words: Vec<&str> = (0..length)
            .filter_map(|_| LOREM_WORDS.choose(rng).copied())
            .collect();

        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get(..1) {
            let upper = first.to_uppercase();
            sentence.replace_range(..1, &upper);
        }
        sentence.push('.');
        sentence
    }

    fn paragraph<R: Rng>(rng: &mut R) -> String {
        let sentences = rng.gen_range(3..=7);
        (0..sentences)
            .map(|_| Self::sentence(rng))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for LoremFiller {
    fn default() -> Self {
        Self::new(3)
    }
}

impl ContentSource for LoremFiller {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        let mut text = (0..self.paragraphs)
            .map(|_| Self::paragraph(&mut rng))
            .collect::<Vec<_>>()
            .join("\n\n");
        text.push('\n');
        text
    }
}

/// Always produces the same text
#[derive(Debug, Clone)]
pub struct FixedText(pub String);

impl FixedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }
}

impl ContentSource for FixedText {
    fn generate(&self) -> String {
        self.0.clone()
    }
}
