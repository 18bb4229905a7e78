//! Word-frequency sentence scoring.
//!
//! A sentence scores the sum of its content words' document frequencies,
//! divided by the highest single-word frequency. Every occurrence counts, so
//! sentences with more frequent content words score higher.

use log::debug;
use std::collections::HashMap;

use crate::resources::LanguageResources;
use crate::text::{Sentence, content_words};

/// Content word -> occurrences across one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    counts: HashMap<String, usize>,
    max: usize,
}

impl WordFrequencyTable {
    /// Count words across all sentences.
    pub fn build<'a, I>(sentences: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for words in sentences {
            for word in words {
                *counts.entry(word.clone()).or_default() += 1;
            }
        }
        let max = counts.values().copied().max().unwrap_or(0);
        Self { counts, max }
    }

    pub fn count(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Summed frequencies of `words`, scaled by the most frequent word.
    ///
    /// Integer counts are summed before dividing so equal sums compare equal.
    pub fn score(&self, words: &[String]) -> f64 {
        if self.max == 0 {
            return 0.0;
        }
        let total: usize = words.iter().map(|w| self.count(w)).sum();
        total as f64 / self.max as f64
    }

    pub fn max_frequency(&self) -> usize {
        self.max
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// A sentence with its importance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: f64,
}

/// Score every sentence of a document, preserving input order.
pub fn score(sentences: &[Sentence], resources: &LanguageResources) -> Vec<ScoredSentence> {
    let words: Vec<Vec<String>> = sentences
        .iter()
        .map(|s| content_words(&s.text, resources))
        .collect();
    let table = WordFrequencyTable::build(words.iter().map(Vec::as_slice));
    debug!(
        "Frequency table: {} distinct words, max frequency {}",
        table.len(),
        table.max_frequency()
    );

    sentences
        .iter()
        .zip(&words)
        .map(|(sentence, words)| ScoredSentence {
            sentence: sentence.clone(),
            score: table.score(words),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use crate::resources::BuiltinLoader;
    use crate::text::tokenize;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_table_counts() {
        let a = words(&["cat", "mammal"]);
        let b = words(&["cat", "sleep", "cat"]);
        let table = WordFrequencyTable::build([a.as_slice(), b.as_slice()]);
        assert_eq!(table.count("cat"), 3);
        assert_eq!(table.count("dog"), 0);
        assert_eq!(table.max_frequency(), 3);
        assert_eq!(table.score(&words(&["cat"])), 1.0);
        assert!((table.score(&words(&["sleep", "dog"])) - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_empty_table() {
        let table = WordFrequencyTable::build(std::iter::empty::<&[String]>());
        assert!(table.is_empty());
        assert_eq!(table.score(&words(&["anything"])), 0.0);
    }

    #[test]
    fn test_scores_follow_input_order() {
        let english = BuiltinLoader::default().bundle(Language::English);
        let sentences = tokenize(
            "Cats are mammals. Cats like sleep. Sleep is important for mammals. Dogs are also mammals.",
            &english,
        );
        let scored = score(&sentences, &english);
        assert_eq!(scored.len(), 4);
        for (i, s) in scored.iter().enumerate() {
            assert_eq!(s.sentence.index, i);
        }
        // "cat" appears twice, "dog" once; both sentences share "mammal"
        assert!(scored[0].score > 0.0);
        assert!(scored[0].score >= scored[3].score);
    }

    #[test]
    fn test_stopword_only_sentence_scores_zero() {
        let english = BuiltinLoader::default().bundle(Language::English);
        let sentences = tokenize("It is what it is. Rockets reach orbit.", &english);
        let scored = score(&sentences, &english);
        assert_eq!(scored[0].score, 0.0);
        assert!(scored[1].score > 0.0);
    }

    #[test]
    fn test_no_word_outweighs_one() {
        let english = BuiltinLoader::default().bundle(Language::English);
        let sentences = tokenize("Rocket rocket rocket rocket. Orbit.", &english);
        let scored = score(&sentences, &english);
        // four occurrences of the top word, each weighted 1.0
        assert!((scored[0].score - 4.0).abs() < 1e-9);
        assert!((scored[1].score - 0.25).abs() < 1e-9);
    }
}
