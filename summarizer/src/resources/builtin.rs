//! Resource bundles compiled into the crate.

use async_trait::async_trait;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;

use super::{LanguageResources, ResourceLoader, abbreviations};
use crate::error::Result;
use crate::language::Language;

/// Loads stopwords from the `stop-words` dataset and the builtin
/// abbreviation tables.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinLoader {
    stemming: bool,
}

impl BuiltinLoader {
    pub fn new(stemming: bool) -> Self {
        Self { stemming }
    }

    /// Build the bundle synchronously.
    pub fn bundle(&self, language: Language) -> LanguageResources {
        let stemmer = if self.stemming {
            stemmer(language)
        } else {
            None
        };
        LanguageResources::new(
            Some(language),
            stopwords(language),
            abbreviations::for_language(language)
                .map(str::to_string)
                .collect(),
            stemmer,
        )
    }
}

impl Default for BuiltinLoader {
    fn default() -> Self {
        Self::new(true)
    }
}

#[async_trait]
impl ResourceLoader for BuiltinLoader {
    async fn load(&self, language: Language) -> Result<LanguageResources> {
        Ok(self.bundle(language))
    }

    fn name(&self) -> &'static str {
        "builtin"
    }
}

fn stopwords(language: Language) -> HashSet<String> {
    use stop_words::LANGUAGE as Dict;

    #[rustfmt::skip]
    let dict = match language {
        Language::Czech      => Dict::Czech,
        Language::German     => Dict::German,
        Language::English    => Dict::English,
        Language::Spanish    => Dict::Spanish,
        Language::French     => Dict::French,
        Language::Italian    => Dict::Italian,
        Language::Portuguese => Dict::Portuguese,
    };
    stop_words::get(dict)
        .into_iter()
        .map(|word| word.to_lowercase())
        .collect()
}

/// Snowball has no Czech algorithm; Czech words are counted unstemmed.
fn stemmer(language: Language) -> Option<Stemmer> {
    #[rustfmt::skip]
    let algorithm = match language {
        Language::German     => Algorithm::German,
        Language::English    => Algorithm::English,
        Language::Spanish    => Algorithm::Spanish,
        Language::French     => Algorithm::French,
        Language::Italian    => Algorithm::Italian,
        Language::Portuguese => Algorithm::Portuguese,
        Language::Czech      => return None,
    };
    Some(Stemmer::create(algorithm))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_bundle() {
        let resources = BuiltinLoader::default().bundle(Language::English);
        assert_eq!(resources.language(), Some(Language::English));
        assert!(resources.is_stopword("the"));
        assert!(resources.is_stopword("and"));
        assert!(!resources.is_stopword("mammals"));
        assert!(resources.is_abbreviation("dr"));
        assert!(resources.has_stemmer());
        assert_eq!(resources.stem("cats"), "cat");
    }

    #[test]
    fn test_every_language_has_stopwords() {
        let loader = BuiltinLoader::default();
        for language in Language::ALL {
            let resources = loader.bundle(language);
            assert!(resources.stopword_count() > 0, "{language}");
            assert!(resources.abbreviation_count() > 0, "{language}");
        }
    }

    #[test]
    fn test_czech_has_no_stemmer() {
        let resources = BuiltinLoader::default().bundle(Language::Czech);
        assert!(!resources.has_stemmer());
        assert!(resources.uses_ordinal_dots());
    }

    #[test]
    fn test_stemming_disabled() {
        let resources = BuiltinLoader::new(false).bundle(Language::English);
        assert!(!resources.has_stemmer());
        assert_eq!(resources.stem("cats"), "cats");
    }

    #[tokio::test]
    async fn test_load_is_infallible() {
        let loader = BuiltinLoader::default();
        let resources = loader.load(Language::German).await.unwrap();
        assert!(resources.is_abbreviation("z.b"));
        assert_eq!(loader.name(), "builtin");
    }
}
