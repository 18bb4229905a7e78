//! Summarization facade: text or HTML in, ordered sentences out.

use log::{debug, warn};
use std::sync::Arc;

use crate::article::Article;
use crate::config::SummarizerConfig;
use crate::document::{Document, DocumentBody};
use crate::error::Result;
use crate::html::{HtmlNormalizer, LanguageIdentifier};
use crate::language::{self, Language};
use crate::resources::{LanguageResources, ResourceCache, ResourceLoader};
use crate::scoring::score;
use crate::selector::select;
use crate::text::tokenize;

/// Extractive summarizer.
///
/// Holds only read-only configuration and a shared language-resource cache,
/// so one instance can serve concurrent calls. Every call builds its own
/// frequency table.
pub struct Summarizer {
    config: SummarizerConfig,
    normalizer: HtmlNormalizer,
    cache: Arc<ResourceCache>,
}

impl Summarizer {
    /// Summarizer using builtin resources, or files under
    /// `config.resource_dir` when set.
    ///
    /// Resources come from the process-wide cache for that source, so every
    /// summarizer built this way loads a language at most once per process.
    pub fn new(config: SummarizerConfig) -> Self {
        let cache = ResourceCache::process_wide(config.resource_dir.as_deref(), config.stemming);
        Self::with_cache(config, cache)
    }

    /// Summarizer with a custom resource source and a cache of its own.
    pub fn with_loader(config: SummarizerConfig, loader: Arc<dyn ResourceLoader>) -> Self {
        Self::with_cache(config, Arc::new(ResourceCache::new(loader)))
    }

    /// Summarizer sharing `cache` with other instances.
    pub fn with_cache(config: SummarizerConfig, cache: Arc<ResourceCache>) -> Self {
        Self {
            normalizer: HtmlNormalizer::from_config(&config),
            cache,
            config,
        }
    }

    /// Consult `identifier` for pages without a `lang` attribute.
    pub fn with_identifier(mut self, identifier: Arc<dyn LanguageIdentifier>) -> Self {
        self.normalizer = self.normalizer.with_identifier(identifier);
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<ResourceCache> {
        &self.cache
    }

    /// Load the resources for `language` ahead of the first call.
    ///
    /// Idempotent; concurrent callers share one load. Unsupported languages
    /// need no preparation and succeed immediately.
    pub async fn prepare(&self, language: &str) -> Result<()> {
        let ready = self
            .supported(language)
            .is_some_and(|supported| self.cache.is_ready(supported));
        if ready {
            debug!("Resources for '{}' already loaded", language);
            return Ok(());
        }
        self.resources_for(language).await.map(|_| ())
    }

    /// Clear a cached load failure so the next call loads again.
    pub fn retry(&self, language: &str) -> bool {
        self.supported(language)
            .is_some_and(|language| self.cache.retry(language))
    }

    /// Summarize plain text into at most `sentence_count` sentences, in
    /// document order.
    pub async fn summarize_text(
        &self,
        text: &str,
        language: &str,
        sentence_count: usize,
    ) -> Result<Vec<String>> {
        if sentence_count == 0 || text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let resources = self.resources_for(language).await?;
        let sentences = tokenize(text, &resources);
        let scored = score(&sentences, &resources);
        let chosen = select(&scored, sentence_count);
        debug!(
            "Selected {} of {} sentences: {:?}",
            chosen.len(),
            sentences.len(),
            chosen.iter().map(|s| s.index).collect::<Vec<_>>()
        );

        Ok(chosen.into_iter().map(|s| s.text).collect())
    }

    /// Summarize an HTML page. The page's own language, when it declares or
    /// reveals one, takes precedence over `language`.
    pub async fn summarize_html(
        &self,
        html: &str,
        language: &str,
        sentence_count: usize,
    ) -> Result<Vec<String>> {
        let normalized = self.normalizer.normalize_with_hint(html, Some(language));
        debug!(
            "Normalized HTML: {} chars of text, language {}",
            normalized.plain_text.len(),
            normalized.language
        );
        self.summarize_text(&normalized.plain_text, &normalized.language, sentence_count)
            .await
    }

    /// Summarize a [`Document`].
    pub async fn summarize(&self, document: &Document) -> Result<Vec<String>> {
        match document.body() {
            DocumentBody::Html(html) => {
                self.summarize_html(html, document.language(), document.sentence_count())
                    .await
            }
            DocumentBody::Text(text) => {
                self.summarize_text(text, document.language(), document.sentence_count())
                    .await
            }
        }
    }

    /// Summarize a fetched page into an [`Article`] carrying its title and
    /// resolved language.
    pub async fn summarize_article(
        &self,
        url: &str,
        html: &str,
        language: &str,
        sentence_count: usize,
    ) -> Result<Article> {
        let normalized = self.normalizer.normalize_with_hint(html, Some(language));
        let sentences = self
            .summarize_text(&normalized.plain_text, &normalized.language, sentence_count)
            .await?;
        Ok(Article::new(
            url,
            normalized.title.unwrap_or_default(),
            sentences,
            normalized.language,
        ))
    }

    fn supported(&self, tag: &str) -> Option<Language> {
        language::resolve(tag, &self.config.supported_languages)
    }

    async fn resources_for(&self, tag: &str) -> Result<Arc<LanguageResources>> {
        let language = self.supported(tag);
        if language.is_none() {
            warn!("No language resources for '{}', using the default ruleset", tag);
        }
        self.cache.get_or_fallback(language).await
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new(SummarizerConfig::default())
    }
}
