//! Word extraction for frequency counting.

use unicode_segmentation::UnicodeSegmentation;

use crate::resources::LanguageResources;

/// Content words of `text`: case-folded, alphabetic, not stopwords, stemmed
/// when the resources carry a stemmer. Repeats are kept.
pub fn content_words(text: &str, resources: &LanguageResources) -> Vec<String> {
    text.unicode_words()
        .filter(|word| word.chars().any(char::is_alphabetic))
        .map(str::to_lowercase)
        .filter(|word| !resources.is_stopword(word))
        .map(|word| resources.stem(&word))
        .collect()
}
