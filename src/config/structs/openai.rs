//! Chat-completion API connectivity and generation parameters.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::llm::{
    DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECS,
};

/// OpenAI (or Azure OpenAI) configuration.
///
/// Stored under the `openai` key of the settings document.
///
/// # Fields
/// - `by_azure`: route requests through an Azure OpenAI deployment
/// - `base_url`: API endpoint (required)
/// - `api_version`: Azure `api-version` query parameter
/// - `api_key`: API key (required; falls back to `OPENAI_API_KEY` when empty)
/// - `timeout`: request timeout in seconds, `0` means the 30 s default
/// - `model`: model (or Azure deployment) name (required)
/// - remaining fields are passed through to the request when set
///
/// # Example
/// ```json
/// {
///   "by_azure": false,
///   "base_url": "https://api.openai.com/v1",
///   "api_key": "sk-...",
///   "timeout": 30,
///   "model": "gpt-4o-mini",
///   "max_tokens": 500,
///   "temperature": 0.3
/// }
/// ```
#[derive(Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OpenAIConfig {
    /// Use the Azure OpenAI URL layout and `api-key` header.
    pub by_azure: bool,

    /// API endpoint.
    pub base_url: String,

    /// Azure `api-version`.
    pub api_version: String,

    /// API key.
    pub api_key: String,

    /// Request timeout in seconds.
    pub timeout: u64,

    /// Model name.
    pub model: String,

    pub max_tokens: Option<u32>,

    /// Sampling temperature in `0.0..=2.0`.
    pub temperature: Option<f32>,

    pub top_p: Option<f32>,

    /// Stop sequences.
    pub stop: Vec<String>,

    pub presence_penalty: Option<f32>,

    pub frequency_penalty: Option<f32>,

    /// Raw `response_format` object, e.g. `{"type": "text"}`.
    pub response_format: Option<serde_json::Value>,

    pub seed: Option<i64>,

    /// Token id to bias.
    pub logit_bias: BTreeMap<String, i32>,

    /// End-user identifier forwarded to the API.
    pub user: Option<String>,
}

impl Default for OpenAIConfig {
    fn default() -> Self {
        Self {
            by_azure: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: String::new(),
            api_key: String::new(),
            timeout: DEFAULT_TIMEOUT_SECS,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: Some(DEFAULT_MAX_TOKENS),
            temperature: Some(DEFAULT_TEMPERATURE),
            top_p: None,
            stop: Vec::new(),
            presence_penalty: None,
            frequency_penalty: None,
            response_format: None,
            seed: None,
            logit_bias: BTreeMap::new(),
            user: None,
        }
    }
}

impl std::fmt::Debug for OpenAIConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::llm::provider::utils::mask_api_key;
        f.debug_struct("OpenAIConfig")
            .field("by_azure", &self.by_azure)
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("api_key", &mask_api_key(&self.api_key))
            .field("timeout", &self.timeout)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("stop", &self.stop)
            .field("presence_penalty", &self.presence_penalty)
            .field("frequency_penalty", &self.frequency_penalty)
            .field("seed", &self.seed)
            .field("user", &self.user)
            .finish()
    }
}

impl OpenAIConfig {
    /// Effective request timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        if self.timeout == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            self.timeout
        }
    }
}
