//! text_scan: Character and word measurements for one text
//!
//! - alphanumeric_chars: word characters, i.e. alphanumerics (any Unicode
//!   letter or number) and `_`
//! - word_lengths: length in Unicode scalar values of each
//!   whitespace-delimited token

/// Measurements taken from a single text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextScan {
    /// Count of word characters
    pub alphanumeric_chars: usize,
    /// Length of every whitespace-delimited token, in order
    pub word_lengths: Vec<usize>,
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Scan a text
pub fn scan_text(text: &str) -> TextScan {
    TextScan {
        alphanumeric_chars: text.chars().filter(|&c| is_word_char(c)).count(),
        word_lengths: text
            .split_whitespace()
            .map(|word| word.chars().count())
            .collect(),
    }
}
