//! Per-language resource bundles (stopwords, abbreviations, stemmer) and the
//! process-wide cache that loads each bundle once.

mod abbreviations;
mod builtin;
mod directory;

pub use builtin::BuiltinLoader;
pub use directory::DirectoryLoader;

use async_trait::async_trait;
use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use rust_stemmers::Stemmer;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{Result, SummaryError};
use crate::language::Language;

/// Read-only data the tokenizer and scorer need for one language.
pub struct LanguageResources {
    language: Option<Language>,
    stopwords: HashSet<String>,
    abbreviations: HashSet<String>,
    stemmer: Option<Stemmer>,
}

static FALLBACK: Lazy<Arc<LanguageResources>> = Lazy::new(|| {
    Arc::new(LanguageResources::new(
        None,
        HashSet::new(),
        abbreviations::fallback().map(str::to_string).collect(),
        None,
    ))
});

impl LanguageResources {
    pub fn new(
        language: Option<Language>,
        stopwords: HashSet<String>,
        abbreviations: HashSet<String>,
        stemmer: Option<Stemmer>,
    ) -> Self {
        Self {
            language,
            stopwords,
            abbreviations,
            stemmer,
        }
    }

    /// Default ruleset for languages without a bundle: no stopwords, no
    /// stemming, only language-neutral abbreviations.
    pub fn fallback() -> Arc<Self> {
        Arc::clone(&FALLBACK)
    }

    /// `None` for the fallback ruleset.
    pub fn language(&self) -> Option<Language> {
        self.language
    }

    /// `word` must already be case-folded.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// `token` is the case-folded text before the period, e.g. "dr" or "e.g".
    pub fn is_abbreviation(&self, token: &str) -> bool {
        self.abbreviations.contains(token)
    }

    /// Whether a period after a short number is an ordinal marker.
    pub fn uses_ordinal_dots(&self) -> bool {
        self.language.is_some_and(|l| l.uses_ordinal_dots())
    }

    /// Stem a case-folded word, or return it unchanged without a stemmer.
    pub fn stem(&self, word: &str) -> String {
        match &self.stemmer {
            Some(stemmer) => stemmer.stem(word).into_owned(),
            None => word.to_string(),
        }
    }

    pub fn stopword_count(&self) -> usize {
        self.stopwords.len()
    }

    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    pub fn has_stemmer(&self) -> bool {
        self.stemmer.is_some()
    }

    /// Add entries on top of the existing sets.
    pub(crate) fn extend(
        &mut self,
        stopwords: impl IntoIterator<Item = String>,
        abbreviations: impl IntoIterator<Item = String>,
    ) {
        self.stopwords.extend(stopwords);
        self.abbreviations.extend(abbreviations);
    }
}

impl fmt::Debug for LanguageResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageResources")
            .field("language", &self.language)
            .field("stopwords", &self.stopwords.len())
            .field("abbreviations", &self.abbreviations.len())
            .field("stemmer", &self.stemmer.is_some())
            .finish()
    }
}

/// Source of language resource bundles.
#[async_trait]
pub trait ResourceLoader: Send + Sync {
    /// Load the bundle for one language
    async fn load(&self, language: Language) -> Result<LanguageResources>;

    /// Loader name for logs
    fn name(&self) -> &'static str;
}

type SharedLoad = Shared<BoxFuture<'static, std::result::Result<Arc<LanguageResources>, String>>>;

/// Resource source -> the one cache for it in this process.
type CacheKey = (Option<PathBuf>, bool);

static PROCESS_CACHES: Lazy<Mutex<HashMap<CacheKey, Arc<ResourceCache>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Load-once cache of language bundles.
///
/// Concurrent first requests for a language share a single load and all see
/// the same outcome. A failed load stays cached until [`ResourceCache::retry`]
/// is called for that language.
pub struct ResourceCache {
    loader: Arc<dyn ResourceLoader>,
    slots: Mutex<HashMap<Language, SharedLoad>>,
}

impl ResourceCache {
    pub fn new(loader: Arc<dyn ResourceLoader>) -> Self {
        Self {
            loader,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// The process-wide cache for builtin resources, or for overrides under
    /// `resource_dir`. Every caller asking for the same source gets the same
    /// cache, so each language loads once per process.
    pub fn process_wide(resource_dir: Option<&Path>, stemming: bool) -> Arc<Self> {
        let key = (resource_dir.map(Path::to_path_buf), stemming);
        let mut caches = PROCESS_CACHES
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let cache = caches.entry(key).or_insert_with(|| {
            let builtin = BuiltinLoader::new(stemming);
            let loader: Arc<dyn ResourceLoader> = match resource_dir {
                Some(dir) => Arc::new(DirectoryLoader::new(dir, builtin)),
                None => Arc::new(builtin),
            };
            debug!("Created process-wide {} resource cache", loader.name());
            Arc::new(Self::new(loader))
        });
        Arc::clone(cache)
    }

    /// Resources for `language`, loading them on first use.
    pub async fn get(&self, language: Language) -> Result<Arc<LanguageResources>> {
        let load = self.slot(language);
        load.await
            .map_err(|reason| SummaryError::ResourceUnavailable {
                language: language.code().to_string(),
                reason,
            })
    }

    /// Resources for an optional language; `None` gets the fallback ruleset.
    pub async fn get_or_fallback(
        &self,
        language: Option<Language>,
    ) -> Result<Arc<LanguageResources>> {
        match language {
            Some(language) => self.get(language).await,
            None => Ok(LanguageResources::fallback()),
        }
    }

    /// Forget a failed load so the next request tries again.
    ///
    /// Returns `true` if a failure was cleared. Successful and in-flight
    /// loads are left alone.
    pub fn retry(&self, language: Language) -> bool {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let failed = slots
            .get(&language)
            .is_some_and(|slot| matches!(slot.peek(), Some(Err(_))));
        if failed {
            slots.remove(&language);
            debug!("Cleared failed resource load for {}", language);
        }
        failed
    }

    /// Whether a successful load for `language` has completed.
    pub fn is_ready(&self, language: Language) -> bool {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots
            .get(&language)
            .is_some_and(|slot| matches!(slot.peek(), Some(Ok(_))))
    }

    fn slot(&self, language: Language) -> SharedLoad {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots
            .entry(language)
            .or_insert_with(|| {
                let loader = Arc::clone(&self.loader);
                async move {
                    info!("Loading {} resources via {} loader", language, loader.name());
                    match loader.load(language).await {
                        Ok(resources) => {
                            debug!("Loaded {} resources: {:?}", language, resources);
                            Ok(Arc::new(resources))
                        }
                        Err(e) => {
                            warn!("Failed to load {} resources: {}", language, e);
                            Err(failure_reason(e))
                        }
                    }
                }
                .boxed()
                .shared()
            })
            .clone()
    }
}

fn failure_reason(error: SummaryError) -> String {
    match error {
        SummaryError::ResourceUnavailable { reason, .. } => reason,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Loader that fails a fixed number of times, then returns an empty bundle.
    struct CountingLoader {
        calls: AtomicUsize,
        failures: usize,
    }

    impl CountingLoader {
        fn new(failures: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                failures,
            }
        }
    }

    #[async_trait]
    impl ResourceLoader for CountingLoader {
        async fn load(&self, language: Language) -> Result<LanguageResources> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            if call < self.failures {
                return Err(SummaryError::ResourceUnavailable {
                    language: language.code().to_string(),
                    reason: "dataset missing".to_string(),
                });
            }
            Ok(LanguageResources::new(
                Some(language),
                HashSet::new(),
                HashSet::new(),
                None,
            ))
        }

        fn name(&self) -> &'static str {
            "counting"
        }
    }

    #[tokio::test]
    async fn test_loads_once_per_language() {
        let loader = Arc::new(CountingLoader::new(0));
        let cache = ResourceCache::new(loader.clone());

        let first = cache.get(Language::English).await.unwrap();
        let second = cache.get(Language::English).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);

        cache.get(Language::German).await.unwrap();
        assert_eq!(loader.calls.load(Ordering::SeqCst), 2);
        assert!(cache.is_ready(Language::German));
    }

    #[tokio::test]
    async fn test_failure_is_cached_until_retry() {
        let loader = Arc::new(CountingLoader::new(1));
        let cache = ResourceCache::new(loader.clone());

        let err = cache.get(Language::French).await.unwrap_err();
        assert!(err.is_resource_failure());
        assert!(err.to_string().contains("dataset missing"));

        // Still failing without an explicit retry, and no second load.
        assert!(cache.get(Language::French).await.is_err());
        assert_eq!(loader.calls.load(Ordering::SeqCst), 1);

        assert!(cache.retry(Language::French));
        assert!(cache.get(Language::French).await.is_ok());
        assert_eq!(loader.calls.load(Ordering::SeqCst), 2);

        // Nothing left to retry.
        assert!(!cache.retry(Language::French));
    }

    #[tokio::test]
    async fn test_fallback_needs_no_load() {
        let loader = Arc::new(CountingLoader::new(usize::MAX));
        let cache = ResourceCache::new(loader.clone());

        let resources = cache.get_or_fallback(None).await.unwrap();
        assert!(resources.language().is_none());
        assert!(resources.is_abbreviation("e.g"));
        assert_eq!(resources.stopword_count(), 0);
        assert_eq!(loader.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_process_wide_cache_is_shared_per_source() {
        let a = ResourceCache::process_wide(None, true);
        let b = ResourceCache::process_wide(None, true);
        assert!(Arc::ptr_eq(&a, &b));

        let unstemmed = ResourceCache::process_wide(None, false);
        assert!(!Arc::ptr_eq(&a, &unstemmed));

        let dir = ResourceCache::process_wide(Some(Path::new("/nonexistent/resources")), true);
        assert!(!Arc::ptr_eq(&a, &dir));
    }

    #[test]
    fn test_stem_without_stemmer_is_identity() {
        let resources = LanguageResources::fallback();
        assert_eq!(resources.stem("running"), "running");
        assert!(!resources.has_stemmer());
    }
}
