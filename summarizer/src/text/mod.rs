//! Text processing: cleaning, sentence splitting and word extraction.

mod cleaner;
pub mod tokenizer;
pub mod words;

pub use cleaner::paragraphs;
pub use tokenizer::tokenize;
pub use words::content_words;

use serde::{Deserialize, Serialize};

/// A sentence of the source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// 0-based position in the document's sentence sequence
    pub index: usize,
    /// Trimmed, non-empty sentence text
    pub text: String,
}

impl Sentence {
    /// Create a new sentence.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_creation() {
        let sentence = Sentence::new(3, "Hello world.");
        assert_eq!(sentence.index, 3);
        assert_eq!(sentence.text, "Hello world.");
    }
}
