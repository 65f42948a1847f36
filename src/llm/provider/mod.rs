pub mod openai;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::config::Settings;
use crate::constants::llm::CONNECT_TIMEOUT_SECS;
use crate::error::{GitrError, Result};
use crate::llm::LLMProvider;

/// Installs the rustls `ring` crypto provider for the process.
///
/// reqwest is built with `rustls-no-provider`, so a provider must be installed
/// before the first client is built. Repeated calls are harmless.
pub fn ensure_crypto_provider() {
    let _ = rustls::crypto::ring::default_provider().install_default();
}

/// Builds an HTTP client with the given request timeout.
pub(crate) fn create_http_client(timeout_secs: u64) -> Result<Client> {
    ensure_crypto_provider();

    let user_agent = format!(
        "{}/{} ({})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS.min(timeout_secs)))
        .build()
        .map_err(|e| GitrError::Llm(format!("Failed to create HTTP client: {}", e)))
}

/// Creates the provider described by `settings`.
///
/// The `openai` section selects between the OpenAI-compatible and the Azure
/// OpenAI request layout; both are served by
/// [`OpenAIProvider`](openai::OpenAIProvider).
pub fn create_provider(settings: &Settings) -> Result<Arc<dyn LLMProvider>> {
    let provider = openai::OpenAIProvider::new(&settings.openai)?;
    tracing::debug!(
        "Using {} provider at {}",
        provider.name(),
        provider.endpoint()
    );
    Ok(Arc::new(provider))
}
