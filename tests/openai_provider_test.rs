//! OpenAI / Azure OpenAI provider against a mock HTTP server

use gitr::error::GitrError;
use gitr::llm::LLMProvider;
use gitr::llm::provider::create_provider;
use gitr::llm::provider::test_utils::{test_azure_settings, test_settings};
use mockito::{Matcher, Server};
use pretty_assertions::assert_eq;
use serde_json::json;

const DIFF: &str = "diff --git a/src/lib.rs b/src/lib.rs\n+pub fn login() {}\n";

/// OpenAI-style base URL (`.../v1`) on the mock server.
fn openai_base(server: &Server) -> String {
    format!("{}/v1", server.url())
}

fn completion(content: &str) -> String {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_openai_request_and_reply() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_header("authorization", "Bearer sk-test-0123456789")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o-mini",
            "max_tokens": 500,
            "messages": [
                { "role": "system" },
                { "role": "user" }
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion("feat(auth): add login"))
        .create_async()
        .await;

    let provider = create_provider(&test_settings(&openai_base(&server))).unwrap();
    let settings = test_settings(&openai_base(&server));
    let reply = provider
        .generate_commit_message(DIFF, &settings.commit_template)
        .await
        .unwrap();

    assert_eq!(reply, "feat(auth): add login");
    assert_eq!(provider.name(), "OpenAI");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_prompt_carries_diff() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::Regex("pub fn login".to_string()))
        .with_status(200)
        .with_body(completion("feat: add login"))
        .create_async()
        .await;

    let reply = gitr::llm::generate(&test_settings(&openai_base(&server)), DIFF)
        .await
        .unwrap();

    assert_eq!(reply, "feat: add login");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unauthorized_maps_to_api_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(401)
        .with_body(
            json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let provider = create_provider(&test_settings(&openai_base(&server))).unwrap();
    let err = provider.send_prompt("system", "user").await.unwrap_err();

    match err {
        GitrError::LlmApi { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Incorrect API key provided");
        }
        other => panic!("expected LlmApi error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_without_envelope() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(503)
        .with_body("upstream unavailable")
        .create_async()
        .await;

    let provider = create_provider(&test_settings(&openai_base(&server))).unwrap();
    let err = provider.send_prompt("system", "user").await.unwrap_err();

    match err {
        GitrError::LlmApi { status, message } => {
            assert_eq!(status, 503);
            assert!(message.contains("upstream unavailable"));
        }
        other => panic!("expected LlmApi error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_no_choices_is_an_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let provider = create_provider(&test_settings(&openai_base(&server))).unwrap();
    let err = provider.send_prompt("system", "user").await.unwrap_err();

    assert!(matches!(err, GitrError::Llm(_)));
}

#[tokio::test]
async fn test_null_content_is_empty_reply() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#)
        .create_async()
        .await;

    let provider = create_provider(&test_settings(&openai_base(&server))).unwrap();
    assert_eq!(provider.send_prompt("system", "user").await.unwrap(), "");
}

#[tokio::test]
async fn test_gateway_base_path_gets_completion_suffix() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/acct/gw/openai/chat/completions")
        .with_status(200)
        .with_body(completion("chore: route through gateway"))
        .create_async()
        .await;

    let base = format!("{}/v1/acct/gw/openai/", server.url());
    let provider = create_provider(&test_settings(&base)).unwrap();

    assert_eq!(
        provider.send_prompt("system", "user").await.unwrap(),
        "chore: route through gateway"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_azure_request_layout() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/openai/deployments/commit-gen/chat/completions")
        .match_query(Matcher::UrlEncoded(
            "api-version".to_string(),
            "2023-05-15".to_string(),
        ))
        .match_header("api-key", "sk-test-0123456789")
        .match_header("authorization", Matcher::Missing)
        .with_status(200)
        .with_body(completion("fix: handle timeout"))
        .create_async()
        .await;

    let provider = create_provider(&test_azure_settings(&server.url(), "commit-gen")).unwrap();
    let reply = provider.send_prompt("system", "user").await.unwrap();

    assert_eq!(reply, "fix: handle timeout");
    assert_eq!(provider.name(), "Azure OpenAI");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_azure_custom_api_version() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/openai/deployments/commit-gen/chat/completions")
        .match_query(Matcher::UrlEncoded(
            "api-version".to_string(),
            "2024-02-01".to_string(),
        ))
        .with_status(200)
        .with_body(completion("docs: update readme"))
        .create_async()
        .await;

    let mut settings = test_azure_settings(&server.url(), "commit-gen");
    settings.openai.api_version = "2024-02-01".to_string();
    let provider = create_provider(&settings).unwrap();

    assert_eq!(
        provider.send_prompt("system", "user").await.unwrap(),
        "docs: update readme"
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_api_key_rejected_before_request() {
    let mut settings = test_settings("http://127.0.0.1:9");
    settings.openai.api_key = "  ".to_string();

    let err = create_provider(&settings).err().unwrap();
    assert!(matches!(err, GitrError::ConfigValidation { field: "api_key" }));
}
