//! Resource bundles extended from files on disk.
//!
//! Layout: `<root>/<code>/stopwords.txt` and `<root>/<code>/abbreviations.txt`,
//! one entry per line, `#` starts a comment line.

use async_trait::async_trait;
use log::debug;
use std::path::{Path, PathBuf};

use super::{BuiltinLoader, LanguageResources, ResourceLoader};
use crate::error::{Result, SummaryError};
use crate::language::Language;

const STOPWORDS_FILE: &str = "stopwords.txt";
const ABBREVIATIONS_FILE: &str = "abbreviations.txt";

/// Merges per-language files over the builtin bundle.
///
/// A language without its own subdirectory gets the builtin bundle. A
/// subdirectory with a missing or unreadable file fails the load.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    root: PathBuf,
    builtin: BuiltinLoader,
}

impl DirectoryLoader {
    pub fn new(root: impl Into<PathBuf>, builtin: BuiltinLoader) -> Self {
        Self {
            root: root.into(),
            builtin,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ResourceLoader for DirectoryLoader {
    async fn load(&self, language: Language) -> Result<LanguageResources> {
        if !exists(&self.root, language).await? {
            return Err(unavailable(
                language,
                format!("resource directory {} does not exist", self.root.display()),
            ));
        }

        let mut resources = self.builtin.bundle(language);
        let dir = self.root.join(language.code());
        if !exists(&dir, language).await? {
            debug!("No overrides for {} in {}", language, self.root.display());
            return Ok(resources);
        }

        let stopwords = read_entries(&dir.join(STOPWORDS_FILE), language).await?;
        let abbreviations = read_entries(&dir.join(ABBREVIATIONS_FILE), language).await?;
        debug!(
            "Read {} stopwords and {} abbreviations from {}",
            stopwords.len(),
            abbreviations.len(),
            dir.display()
        );
        resources.extend(
            stopwords,
            abbreviations
                .into_iter()
                .map(|a| a.trim_end_matches('.').to_string()),
        );
        Ok(resources)
    }

    fn name(&self) -> &'static str {
        "directory"
    }
}

/// Whether `path` exists; an error while checking fails the load.
async fn exists(path: &Path, language: Language) -> Result<bool> {
    tokio::fs::try_exists(path)
        .await
        .map_err(|e| unavailable(language, format!("{}: {}", path.display(), e)))
}

async fn read_entries(path: &Path, language: Language) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| unavailable(language, format!("{}: {}", path.display(), e)))?;
    Ok(parse_entries(&content))
}

fn parse_entries(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect()
}

fn unavailable(language: Language, reason: String) -> SummaryError {
    SummaryError::ResourceUnavailable {
        language: language.code().to_string(),
        reason,
    }
}
