pub mod classify;
pub mod fallback;
pub mod prompt;
pub mod providers;

pub use classify::{classify, ClassifiedError, ProviderError};
pub use fallback::mock_summary;
pub use prompt::build_prompts;
pub use providers::{create_provider, CompletionProvider, OpenAiProvider};

/// Sampling temperature for summarization calls. Kept low so repeated
/// requests over the same text stay close to each other.
pub const TEMPERATURE: f32 = 0.2;

/// Provider configuration, read once at process start.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Upstream API key. `None` selects the mock path.
    pub api_key: Option<String>,
    /// Override for the completion API base URL.
    pub base_url: Option<String>,
}

pub mod prelude {
    pub use super::providers::{create_provider, CompletionProvider};
    pub use super::Config;
    pub use sumd_core::{Result, SummarizeRequest, SummarizeResponse};
}
