//! Extractive article summarization.
//!
//! Picks the sentences of a document that carry its most frequent content
//! words and returns them in document order:
//! - HTML normalization (tag stripping, language and metadata extraction)
//! - Language-aware sentence splitting with abbreviation rules
//! - Word-frequency scoring over stopword-filtered, stemmed words
//! - Top-N selection with deterministic tie-breaking
//!
//! ```no_run
//! # async fn run() -> summarizer::Result<()> {
//! let summarizer = summarizer::Summarizer::default();
//! summarizer.prepare("en").await?;
//! let summary = summarizer
//!     .summarize_text("Cats are mammals. Cats like sleep. Dogs bark.", "en", 2)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod article;
pub mod config;
pub mod document;
pub mod error;
pub mod html;
pub mod language;
pub mod resources;
pub mod scoring;
pub mod selector;
pub mod summarizer;
pub mod text;

pub use article::Article;
pub use config::{DEFAULT_SENTENCE_COUNT, SummarizerConfig};
pub use document::{Document, DocumentBody};
pub use error::{Result, SummaryError};
pub use html::{
    HtmlNormalizer, Identified, LanguageIdentifier, NoIdentifier, NormalizedDocument, StripRules,
    TagAction,
};
pub use language::Language;
pub use resources::{
    BuiltinLoader, DirectoryLoader, LanguageResources, ResourceCache, ResourceLoader,
};
pub use scoring::{ScoredSentence, WordFrequencyTable};
pub use summarizer::Summarizer;
pub use text::Sentence;
