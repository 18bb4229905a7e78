//! Summarizer configuration, stored as TOML under the user config dir.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::error::{Result, SummaryError};
use crate::html::TagAction;
use crate::language::DEFAULT_LANGUAGE;

/// Default number of sentences in a summary.
pub const DEFAULT_SENTENCE_COUNT: usize = 7;

/// Tags whose whole subtree never contributes text: media, code and page
/// chrome around the article body.
const DEFAULT_STRIP_TAGS: &[&str] = &[
    "img", "picture", "figure", "script", "style", "nav", "header", "footer", "aside", "form",
];

/// Languages with builtin resource bundles.
const DEFAULT_SUPPORTED: &[&str] = &["cs", "de", "en", "es", "fr", "it", "pt"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Sentences per summary when the caller does not ask for a count
    #[serde(default = "default_sentence_count")]
    pub sentence_count: usize,

    /// Language used when a document's language is unknown or unsupported
    #[serde(default = "default_language")]
    pub default_language: String,

    /// Languages that get stopword and abbreviation bundles
    #[serde(default = "default_supported_languages")]
    pub supported_languages: Vec<String>,

    /// Fold words through a Snowball stemmer before counting
    #[serde(default = "default_stemming")]
    pub stemming: bool,

    /// Directory with per-language overrides (`<code>/stopwords.txt`,
    /// `<code>/abbreviations.txt`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_dir: Option<PathBuf>,

    /// HTML tag name -> action taken by the normalizer
    #[serde(default = "default_strip_tags")]
    pub strip_tags: BTreeMap<String, TagAction>,
}

fn default_sentence_count() -> usize {
    DEFAULT_SENTENCE_COUNT
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_supported_languages() -> Vec<String> {
    DEFAULT_SUPPORTED.iter().map(|s| s.to_string()).collect()
}

fn default_strip_tags() -> BTreeMap<String, TagAction> {
    DEFAULT_STRIP_TAGS
        .iter()
        .map(|tag| (tag.to_string(), TagAction::Strip))
        .collect()
}

fn default_stemming() -> bool {
    true
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            sentence_count: default_sentence_count(),
            default_language: default_language(),
            supported_languages: default_supported_languages(),
            stemming: default_stemming(),
            resource_dir: None,
            strip_tags: default_strip_tags(),
        }
    }
}

impl SummarizerConfig {
    /// Get the config file path: <config_dir>/newsumm/summarizer.toml
    pub fn config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| SummaryError::ConfigError("no config directory".into()))?;
        Ok(base.join("newsumm").join("summarizer.toml"))
    }

    /// Load config from the default location, returning defaults if the
    /// file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: SummarizerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Reject settings the pipeline cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.default_language.trim().is_empty() {
            return Err(SummaryError::ConfigError(
                "default_language must not be empty".into(),
            ));
        }
        if crate::language::Language::from_tag(&self.default_language).is_none() {
            return Err(SummaryError::ConfigError(format!(
                "default_language '{}' has no resource bundle",
                self.default_language
            )));
        }
        Ok(())
    }
}
