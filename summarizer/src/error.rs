use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Language resources unavailable for '{language}': {reason}")]
    ResourceUnavailable { language: String, reason: String },

    #[error("No input document was provided")]
    MissingInput,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SummaryError {
    /// Whether retrying the resource load for this language might help.
    pub fn is_resource_failure(&self) -> bool {
        matches!(self, Self::ResourceUnavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, SummaryError>;
