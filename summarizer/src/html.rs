//! HTML normalization: strip non-content markup, extract plain text, page
//! metadata and the document language.

use log::debug;
use scraper::{ElementRef, Html, Node, Selector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::SummarizerConfig;
use crate::language::{self, DEFAULT_LANGUAGE};

/// What the normalizer does with an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagAction {
    /// Drop the element and everything inside it
    Strip,
    /// Keep the text but end the paragraph before and after it
    Break,
    /// Keep the text inline
    Keep,
}

/// BCP 47 tag for an undetermined language.
const UNDETERMINED_TAG: &str = "und";

/// Elements that are never rendered as text, whatever the rules say.
const INERT_TAGS: &[&str] = &["head", "noscript", "template", "iframe", "svg", "object"];

/// Elements that end a paragraph even without a rule.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "blockquote", "caption", "dd", "details", "div", "dl", "dt",
    "figcaption", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li",
    "main", "nav", "ol", "p", "pre", "section", "summary", "table", "td", "th", "tr", "ul",
];

/// Tag name -> action mapping, extendable by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripRules {
    rules: BTreeMap<String, TagAction>,
}

impl StripRules {
    pub fn new(rules: BTreeMap<String, TagAction>) -> Self {
        let rules = rules
            .into_iter()
            .map(|(tag, action)| (tag.to_lowercase(), action))
            .collect();
        Self { rules }
    }

    /// Add or replace the rule for a tag.
    pub fn insert(&mut self, tag: &str, action: TagAction) {
        self.rules.insert(tag.to_lowercase(), action);
    }

    /// Builder form of [`StripRules::insert`].
    pub fn with(mut self, tag: &str, action: TagAction) -> Self {
        self.insert(tag, action);
        self
    }

    /// Action for an element name; unlisted tags are kept.
    pub fn action(&self, tag: &str) -> TagAction {
        self.rules.get(tag).copied().unwrap_or(TagAction::Keep)
    }
}

impl Default for StripRules {
    fn default() -> Self {
        Self::new(SummarizerConfig::default().strip_tags)
    }
}

/// Result of asking a language identifier about a snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identified {
    Language(String),
    Undetermined,
}

/// External language identification, consulted when the page declares no
/// `lang` attribute.
pub trait LanguageIdentifier: Send + Sync {
    /// Best guess for a short text snippet
    fn identify(&self, snippet: &str) -> Identified;
}

/// Identifier that never knows.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIdentifier;

impl LanguageIdentifier for NoIdentifier {
    fn identify(&self, _snippet: &str) -> Identified {
        Identified::Undetermined
    }
}

/// Plain text and metadata extracted from an HTML page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedDocument {
    /// Text with markup removed; blank lines separate block elements
    pub plain_text: String,
    /// Supported language code used for summarization
    pub language: String,
    /// Language found in the page itself (`lang` attribute or identifier),
    /// before the supported-set fallback
    pub detected_language: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub amp_url: Option<String>,
    pub image: Option<String>,
}

/// Turns raw HTML into a [`NormalizedDocument`].
#[derive(Clone)]
pub struct HtmlNormalizer {
    rules: StripRules,
    identifier: Arc<dyn LanguageIdentifier>,
    supported: Vec<String>,
    default_language: String,
}

impl HtmlNormalizer {
    pub fn new(rules: StripRules) -> Self {
        let config = SummarizerConfig::default();
        Self {
            rules,
            identifier: Arc::new(NoIdentifier),
            supported: config.supported_languages,
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Normalizer configured from the summarizer settings.
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            rules: StripRules::new(config.strip_tags.clone()),
            identifier: Arc::new(NoIdentifier),
            supported: config.supported_languages.clone(),
            default_language: language::primary_subtag(&config.default_language),
        }
    }

    pub fn with_identifier(mut self, identifier: Arc<dyn LanguageIdentifier>) -> Self {
        self.identifier = identifier;
        self
    }

    pub fn rules(&self) -> &StripRules {
        &self.rules
    }

    /// Normalize a page with no caller-declared language.
    pub fn normalize(&self, html: &str) -> NormalizedDocument {
        self.normalize_with_hint(html, None)
    }

    /// Normalize a page. The page's own language wins over `hint`; the hint
    /// wins over the default language.
    ///
    /// Malformed markup is parsed best-effort and never fails.
    pub fn normalize_with_hint(&self, html: &str, hint: Option<&str>) -> NormalizedDocument {
        let document = Html::parse_document(html);

        let description = meta_content(&document, r#"meta[name="description"]"#);
        let detected_language = declared_language(&document).or_else(|| {
            let snippet = description.as_deref()?;
            match self.identifier.identify(snippet) {
                Identified::Language(tag) => Some(language::primary_subtag(&tag))
                    .filter(|t| !t.is_empty() && t != UNDETERMINED_TAG),
                Identified::Undetermined => None,
            }
        });

        let candidate = detected_language
            .clone()
            .or_else(|| hint.map(language::primary_subtag))
            .unwrap_or_else(|| self.default_language.clone());
        let language = match language::resolve(&candidate, &self.supported) {
            Some(language) => language.code().to_string(),
            None => {
                debug!(
                    "Language '{}' unsupported, using '{}'",
                    candidate, self.default_language
                );
                self.default_language.clone()
            }
        };

        NormalizedDocument {
            plain_text: extract_text(&document, &self.rules),
            language,
            detected_language,
            title: extract_title(&document),
            description,
            amp_url: attr_of(&document, "link[rel=amphtml][href]", "href"),
            image: meta_content(&document, r#"meta[property="og:image"]"#)
                .or_else(|| meta_content(&document, r#"meta[property="twitter:image"]"#))
                .or_else(|| meta_content(&document, r#"meta[name="twitter:image"]"#)),
        }
    }
}

impl Default for HtmlNormalizer {
    fn default() -> Self {
        Self::new(StripRules::default())
    }
}

enum Step<N> {
    Visit(N),
    Break,
}

/// Walk the tree depth-first, skipping stripped and inert subtrees.
fn extract_text(document: &Html, rules: &StripRules) -> String {
    let mut out = String::new();
    let mut stack = vec![Step::Visit(document.tree.root())];

    while let Some(step) = stack.pop() {
        let node = match step {
            Step::Visit(node) => node,
            Step::Break => {
                paragraph_break(&mut out);
                continue;
            }
        };

        match node.value() {
            Node::Text(text) => {
                out.extend(text.chars().map(|c| if c == '\n' || c == '\r' { ' ' } else { c }));
            }
            Node::Element(element) => {
                let name = element.name();
                if INERT_TAGS.contains(&name) {
                    continue;
                }
                let action = rules.action(name);
                if action == TagAction::Strip {
                    continue;
                }
                if name == "br" {
                    out.push('\n');
                    continue;
                }
                if action == TagAction::Break || BLOCK_TAGS.contains(&name) {
                    paragraph_break(&mut out);
                    stack.push(Step::Break);
                }
                stack.extend(node.children().rev().map(Step::Visit));
            }
            Node::Document | Node::Fragment => {
                stack.extend(node.children().rev().map(Step::Visit));
            }
            _ => {}
        }
    }

    out.trim().to_string()
}

fn paragraph_break(out: &mut String) {
    let trimmed = out.trim_end_matches([' ', '\t']).len();
    out.truncate(trimmed);
    if !out.is_empty() && !out.ends_with("\n\n") {
        if !out.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
}

/// `lang` attribute of the root element, reduced to its primary subtag.
fn declared_language(document: &Html) -> Option<String> {
    let lang = attr_of(document, "html[lang]", "lang")?;
    let primary = language::primary_subtag(&lang);
    (!primary.is_empty()).then_some(primary)
}

/// Priority: `<title>`, then `og:title`, then the first `<h1>`.
fn extract_title(document: &Html) -> Option<String> {
    first_element(document, "title")
        .map(element_text)
        .filter(|t| !t.is_empty())
        .or_else(|| meta_content(document, r#"meta[property="og:title"]"#))
        .or_else(|| {
            first_element(document, "h1")
                .map(element_text)
                .filter(|t| !t.is_empty())
        })
}

fn first_element<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    document.select(&selector).next()
}

fn attr_of(document: &Html, css: &str, attr: &str) -> Option<String> {
    first_element(document, css)
        .and_then(|el| el.value().attr(attr))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn meta_content(document: &Html, css: &str) -> Option<String> {
    attr_of(document, css, "content")
}

fn element_text(element: ElementRef<'_>) -> String {
    let text: String = element.text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
