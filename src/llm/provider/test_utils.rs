//! Test utilities for provider tests

use crate::config::Settings;

/// Complete settings pointing at `base_url` (e.g. a `mockito::Server`).
///
/// # Example
/// ```
/// use gitr::llm::provider::test_utils::test_settings;
///
/// let settings = test_settings("http://127.0.0.1:1234");
/// assert!(!settings.is_incomplete());
/// ```
pub fn test_settings(base_url: &str) -> Settings {
    let mut settings = Settings::default();
    settings.openai.base_url = base_url.to_string();
    settings.openai.api_key = "sk-test-0123456789".to_string();
    settings.openai.model = "gpt-4o-mini".to_string();
    settings
}

/// [`test_settings`] switched to the Azure OpenAI layout.
pub fn test_azure_settings(base_url: &str, deployment: &str) -> Settings {
    let mut settings = test_settings(base_url);
    settings.openai.by_azure = true;
    settings.openai.model = deployment.to_string();
    settings
}
