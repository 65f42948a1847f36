//! Commit message generation.
//!
//! Prompt construction, the provider interface, and response cleanup.

/// Prompt building for commit generation.
pub mod prompt;
/// Chat-completion providers and factory helpers.
pub mod provider;
/// Raw response cleanup.
pub mod response;

use async_trait::async_trait;

use crate::config::{CommitTemplateConfig, Settings};
use crate::error::Result;

/// Interface to a chat-completion backend.
///
/// The only required methods are [`send_prompt`](Self::send_prompt) and
/// [`name`](Self::name). [`generate_commit_message`](Self::generate_commit_message)
/// builds the prompt via [`llm::prompt`](crate::llm::prompt) and returns the
/// raw model output; cleanup is done by
/// [`parse_commit_message`](response::parse_commit_message).
///
/// # Built-In Implementations
/// - [`OpenAIProvider`](provider::openai::OpenAIProvider) - OpenAI-compatible and Azure OpenAI
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Sends a `(system, user)` prompt pair and returns the raw completion text.
    async fn send_prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;

    /// Provider name used in logs and error messages.
    fn name(&self) -> &str;

    /// Requests a commit message for `diff` following `template`.
    async fn generate_commit_message(
        &self,
        diff: &str,
        template: &CommitTemplateConfig,
    ) -> Result<String> {
        let (system, user) = prompt::build_commit_prompt(diff, template);

        tracing::debug!(
            "Commit prompt: system {} chars, user {} chars",
            system.len(),
            user.len()
        );

        let response = self.send_prompt(&system, &user).await?;

        tracing::debug!("Raw commit message response: {}", response);

        Ok(response)
    }
}

/// Generates the raw commit message for `diff` with the provider built from
/// `settings`.
///
/// `settings` must already be the effective settings
/// ([`Settings::with_env_overrides`]), so the `OPENAI_API_KEY` fallback has
/// been applied.
pub async fn generate(settings: &Settings, diff: &str) -> Result<String> {
    let provider = provider::create_provider(settings)?;
    provider
        .generate_commit_message(diff, &settings.commit_template)
        .await
}
