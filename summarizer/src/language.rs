//! Language tags and the set of languages with resource bundles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag used when nothing better is known.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Languages that ship stopword and abbreviation bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Czech,
    German,
    English,
    Spanish,
    French,
    Italian,
    Portuguese,
}

impl Language {
    /// All languages with builtin resources, in tag order.
    pub const ALL: [Language; 7] = [
        Language::Czech,
        Language::German,
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Italian,
        Language::Portuguese,
    ];

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Czech => "cs",
            Self::German => "de",
            Self::English => "en",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::Italian => "it",
            Self::Portuguese => "pt",
        }
    }

    /// Parse a language tag such as "en", "de-AT" or "PT_br".
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = primary_subtag(tag);
        Self::ALL.into_iter().find(|l| l.code() == primary)
    }

    /// Whether a period after a one- or two-digit number marks an ordinal
    /// ("3. Oktober") rather than the end of a sentence.
    pub fn uses_ordinal_dots(&self) -> bool {
        matches!(self, Self::Czech | Self::German)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Primary subtag of a BCP 47-ish tag, case-folded: "en-US" becomes "en".
pub fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Resolve a tag against an allow-list of codes.
///
/// Returns `None` when the tag is empty, unknown, or not allowed; callers
/// then degrade to the default ruleset.
pub fn resolve<S: AsRef<str>>(tag: &str, supported: &[S]) -> Option<Language> {
    let language = Language::from_tag(tag)?;
    supported
        .iter()
        .any(|s| primary_subtag(s.as_ref()) == language.code())
        .then_some(language)
}
