//! The summarized article handed to display and speech consumers.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Article {
    pub url: String,
    #[serde(default)]
    pub title: String,
    /// Summary sentences in document order
    #[serde(default)]
    pub sentences: Vec<String>,
    /// Language code the sentences were produced for
    #[serde(default)]
    pub language: String,
}

impl Article {
    pub fn new(
        url: impl Into<String>,
        title: impl Into<String>,
        sentences: Vec<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            sentences,
            language: language.into(),
        }
    }

    /// Whether every sentence fits a consumer's utterance limit (in chars).
    pub fn is_speakable(&self, max_len: usize) -> bool {
        self.sentences
            .iter()
            .all(|s| s.chars().count() <= max_len)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article::new(
            "https://example.com/story",
            "Story",
            vec!["First.".to_string(), "Second sentence here.".to_string()],
            "en",
        )
    }

    #[test]
    fn test_is_speakable() {
        let article = article();
        assert!(article.is_speakable(100));
        assert!(!article.is_speakable(10));
        assert!(Article::default().is_speakable(0));
    }

    #[test]
    fn test_json_shape() {
        let json = article().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["url"], "https://example.com/story");
        assert_eq!(value["sentences"][1], "Second sentence here.");
        assert_eq!(value["language"], "en");
    }

    #[test]
    fn test_missing_fields_default() {
        let parsed: Article = serde_json::from_str(r#"{"url": "u"}"#).unwrap();
        assert_eq!(parsed.url, "u");
        assert!(parsed.title.is_empty());
        assert!(parsed.sentences.is_empty());
    }
}
