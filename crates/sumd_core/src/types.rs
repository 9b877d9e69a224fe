use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Completion model used when the request does not override it.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Model identifier reported when the fallback summarizer produced the output.
pub const MOCK_MODEL: &str = "mock";

/// Shortest text worth summarizing; anything under this is rejected.
pub const MIN_TEXT_CHARS: usize = 20;

const DEFAULT_LANGUAGE: &str = "English";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    #[default]
    Short,
    Medium,
    Long,
}

impl SummaryLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub length: SummaryLength,
    #[serde(default)]
    pub model: Option<String>,
}

impl SummarizeRequest {
    pub fn validate(&self) -> Result<()> {
        if self.text.chars().count() < MIN_TEXT_CHARS {
            return Err(Error::Validation(format!(
                "text must be at least {} characters long",
                MIN_TEXT_CHARS
            )));
        }
        Ok(())
    }

    /// Language the summary should be written in.
    pub fn effective_language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Model identifier to send upstream: request override, else `default`.
    pub fn effective_model<'a>(&'a self, default: &'a str) -> &'a str {
        self.model.as_deref().unwrap_or(default)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub model_used: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
