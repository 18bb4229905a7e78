//! Input documents for the summarization facade.

use crate::config::DEFAULT_SENTENCE_COUNT;
use crate::error::{Result, SummaryError};
use crate::language::DEFAULT_LANGUAGE;

/// Raw document content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentBody {
    Html(String),
    Text(String),
}

/// A document to summarize, with the caller's language and sentence budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    body: DocumentBody,
    language: String,
    sentence_count: usize,
}

impl Document {
    pub fn html(html: impl Into<String>) -> Self {
        Self::new(DocumentBody::Html(html.into()))
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::new(DocumentBody::Text(text.into()))
    }

    fn new(body: DocumentBody) -> Self {
        Self {
            body,
            language: DEFAULT_LANGUAGE.to_string(),
            sentence_count: DEFAULT_SENTENCE_COUNT,
        }
    }

    /// Build from optional parts; HTML wins when both are present.
    pub fn from_parts(html: Option<String>, text: Option<String>) -> Result<Self> {
        match (html, text) {
            (Some(html), _) => Ok(Self::html(html)),
            (None, Some(text)) => Ok(Self::text(text)),
            (None, None) => Err(SummaryError::MissingInput),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_sentence_count(mut self, sentence_count: usize) -> Self {
        self.sentence_count = sentence_count;
        self
    }

    pub fn body(&self) -> &DocumentBody {
        &self.body
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }
}
