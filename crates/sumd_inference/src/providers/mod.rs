use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::classify::ProviderError;
use crate::Config;

pub mod openai;

pub use openai::OpenAiProvider;

/// One-shot completion capability. Implementations perform the outbound call
/// and extract the generated text; they never classify failures.
#[async_trait]
pub trait CompletionProvider: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Issues exactly one completion request. No retries, no timeout beyond
    /// the transport default.
    async fn complete(
        &self,
        model: &str,
        system_prompt: &str,
        user_prompt: &str,
        temperature: f32,
    ) -> Result<String, ProviderError>;
}

/// Builds the live provider when an API key is configured. A missing key
/// selects the mock path and is not an error.
pub fn create_provider(config: &Config) -> Option<Arc<dyn CompletionProvider>> {
    let api_key = config.api_key.clone()?;
    Some(Arc::new(OpenAiProvider::new(
        api_key,
        config.base_url.clone(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_provider_requires_api_key() {
        assert!(create_provider(&Config::default()).is_none());

        let config = Config {
            api_key: Some("test-key".to_string()),
            base_url: None,
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.name(), "OpenAI");
    }
}
