use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};

use super::utils::{complete_endpoint, mask_api_key};
use crate::config::OpenAIConfig;
use crate::constants::llm::DEFAULT_AZURE_API_VERSION;
use crate::constants::ui::ERROR_PREVIEW_LENGTH;
use crate::error::{GitrError, Result};
use crate::llm::LLMProvider;

/// OpenAI chat-completion provider.
///
/// Talks to any OpenAI-compatible endpoint, or to an Azure OpenAI deployment
/// when `by_azure` is set:
///
/// | layout | URL | auth header |
/// |---|---|---|
/// | OpenAI | `{base_url}/chat/completions` (kept as is when already present) | `Authorization: Bearer <key>` |
/// | Azure | `{base_url}/openai/deployments/{model}/chat/completions?api-version=<v>` | `api-key: <key>` |
pub struct OpenAIProvider {
    client: Client,
    endpoint: String,
    auth: Auth,
    api_version: Option<String>,
    options: OpenAIConfig,
}

enum Auth {
    Bearer(String),
    AzureKey(String),
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<MessagePayload<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<&'a serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    logit_bias: Option<&'a BTreeMap<String, i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<&'a str>,
}

#[derive(Serialize)]
struct MessagePayload<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl OpenAIProvider {
    pub fn new(config: &OpenAIConfig) -> Result<Self> {
        let api_key = config.api_key.trim();
        if api_key.is_empty() {
            return Err(GitrError::ConfigValidation { field: "api_key" });
        }

        let (endpoint, auth, api_version) = if config.by_azure {
            let version = if config.api_version.trim().is_empty() {
                DEFAULT_AZURE_API_VERSION
            } else {
                config.api_version.trim()
            };
            (
                azure_endpoint(&config.base_url, &config.model),
                Auth::AzureKey(api_key.to_string()),
                Some(version.to_string()),
            )
        } else {
            (
                complete_endpoint(&config.base_url),
                Auth::Bearer(api_key.to_string()),
                None,
            )
        };

        Ok(Self {
            client: super::create_http_client(config.timeout_secs())?,
            endpoint,
            auth,
            api_version,
            options: config.clone(),
        })
    }

    /// Resolved request URL, without the Azure `api-version` query.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request<'a>(&'a self, system: &'a str, user: &'a str) -> ChatRequest<'a> {
        let o = &self.options;
        ChatRequest {
            model: &o.model,
            messages: vec![
                MessagePayload {
                    role: "system",
                    content: system,
                },
                MessagePayload {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: o.max_tokens,
            temperature: o.temperature,
            top_p: o.top_p,
            stop: (!o.stop.is_empty()).then_some(o.stop.as_slice()),
            presence_penalty: o.presence_penalty,
            frequency_penalty: o.frequency_penalty,
            response_format: o.response_format.as_ref(),
            seed: o.seed,
            logit_bias: (!o.logit_bias.is_empty()).then_some(&o.logit_bias),
            user: o.user.as_deref(),
        }
    }

    /// Endpoint plus the Azure `api-version` query when present.
    fn request_url(&self) -> String {
        match &self.api_version {
            Some(version) => format!("{}?api-version={}", self.endpoint, version),
            None => self.endpoint.clone(),
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.auth {
            Auth::Bearer(key) => request.bearer_auth(key),
            Auth::AzureKey(key) => request.header("api-key", key),
        }
    }

    async fn call_api(&self, system: &str, user: &str) -> Result<String> {
        let request = self.build_request(system, user);

        tracing::debug!(
            "OpenAI API request: endpoint={}, model={}, key={}, max_tokens={:?}, temperature={:?}",
            self.endpoint,
            self.options.model,
            mask_api_key(&self.options.api_key),
            request.max_tokens,
            request.temperature
        );

        let response = self
            .authorize(self.client.post(self.request_url()))
            .json(&request)
            .send()
            .await
            .map_err(|e| map_send_error(self.name(), e))?;

        let status = response.status();
        let response_text = response.text().await?;

        tracing::debug!("OpenAI API response status: {}", status);
        tracing::debug!("OpenAI API response body: {}", response_text);

        if !status.is_success() {
            return Err(GitrError::LlmApi {
                status: status.as_u16(),
                message: error_message(&response_text),
            });
        }

        let body: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            GitrError::Llm(format!(
                "Failed to parse OpenAI response: {}. Raw response: {}",
                e,
                preview(&response_text)
            ))
        })?;

        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GitrError::Llm("OpenAI response contained no choices".to_string()))?;

        Ok(choice.message.content.unwrap_or_default())
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn send_prompt(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.call_api(system_prompt, user_prompt).await
    }

    fn name(&self) -> &str {
        match self.auth {
            Auth::Bearer(_) => "OpenAI",
            Auth::AzureKey(_) => "Azure OpenAI",
        }
    }
}

fn azure_endpoint(base_url: &str, deployment: &str) -> String {
    format!(
        "{}/openai/deployments/{}/chat/completions",
        base_url.trim_end_matches('/'),
        deployment.trim()
    )
}

fn map_send_error(provider_name: &str, e: reqwest::Error) -> GitrError {
    tracing::debug!("{} API request failed: {}", provider_name, e);

    if e.is_timeout() {
        GitrError::Llm(format!(
            "{} API request timed out: {}. The request took too long to complete.",
            provider_name, e
        ))
    } else if e.is_connect() {
        GitrError::Llm(format!(
            "{} API connection failed: {}. Check network connectivity or API endpoint.",
            provider_name, e
        ))
    } else {
        GitrError::Network(e)
    }
}

/// `error.message` of an OpenAI error envelope, else a preview of the body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => preview(body),
    }
}

fn preview(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= ERROR_PREVIEW_LENGTH {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(ERROR_PREVIEW_LENGTH).collect();
    format!("{}...", head)
}
