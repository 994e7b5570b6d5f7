use agri_advisory::config::{DEFAULT_MODEL, DEFAULT_TITLE};
use agri_advisory::core::prompt::{build_prompt, SYSTEM_PERSONA};
use agri_advisory::utils::error::{AdvisoryError, ErrorCategory};
use agri_advisory::{AdvisoryEngine, AdvisoryRequest, AdvisorySettings, OpenRouterTransport};
use anyhow::Result;
use httpmock::prelude::*;
use std::time::Duration;

const COMPLETIONS_PATH: &str = "/api/v1/chat/completions";

fn engine_for(server: &MockServer) -> Result<AdvisoryEngine<OpenRouterTransport<AdvisorySettings>>> {
    let settings = AdvisorySettings::new("sk-or-test").with_endpoint(server.url(COMPLETIONS_PATH));
    Ok(AdvisoryEngine::from_config(settings)?)
}

fn completion_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "gen-123",
        "model": DEFAULT_MODEL,
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "finish_reason": "stop",
            "message": {"role": "assistant", "content": content}
        }]
    })
}

/// 完整流程：表單送出後收到模型內容
#[tokio::test]
async fn test_potato_late_blight_returns_content_verbatim() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path(COMPLETIONS_PATH)
            .header("Authorization", "Bearer sk-or-test")
            .header("X-Title", DEFAULT_TITLE)
            .json_body(serde_json::json!({
                "model": DEFAULT_MODEL,
                "messages": [
                    {"role": "system", "content": SYSTEM_PERSONA},
                    {"role": "user", "content": build_prompt("Potato", "Late Blight")}
                ],
                "temperature": 0.7,
                "top_p": 0.9,
                "max_tokens": 900
            }));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(completion_body("### 1. About..."));
    });

    let engine = engine_for(&server)?;
    let response = engine
        .submit(&AdvisoryRequest::new("Potato", "Late Blight"))
        .await?;

    api_mock.assert();
    assert_eq!(response.content, "### 1. About...");
    Ok(())
}

#[tokio::test]
async fn test_empty_field_never_issues_request() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path(COMPLETIONS_PATH);
        then.status(200).json_body(completion_body("unused"));
    });

    let engine = engine_for(&server)?;

    for request in [
        AdvisoryRequest::new("", "Late Blight"),
        AdvisoryRequest::new("Potato", ""),
        AdvisoryRequest::default(),
    ] {
        let err = engine.submit(&request).await.unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.user_friendly_message(), "Please enter both plant and disease.");
    }

    api_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_whitespace_field_still_issues_request() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path(COMPLETIONS_PATH);
        then.status(200).json_body(completion_body("### 1. About..."));
    });

    let engine = engine_for(&server)?;
    let response = engine
        .submit(&AdvisoryRequest::new(" ", "Late Blight"))
        .await?;

    api_mock.assert_hits(1);
    assert_eq!(response.content, "### 1. About...");
    Ok(())
}

#[tokio::test]
async fn test_unauthorized_is_remote_service_error() -> Result<()> {
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path(COMPLETIONS_PATH);
        then.status(401)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"error": {"message": "User not found.", "code": 401}}));
    });

    let engine = engine_for(&server)?;
    let err = engine
        .submit(&AdvisoryRequest::new("Potato", "Late Blight"))
        .await
        .unwrap_err();

    api_mock.assert();
    assert!(matches!(err, AdvisoryError::HttpStatusError { status: 401, .. }));
    assert_eq!(err.category(), ErrorCategory::RemoteService);
    assert!(err.user_friendly_message().contains("User not found."));
    Ok(())
}

#[tokio::test]
async fn test_missing_choices_is_visible_error() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path(COMPLETIONS_PATH);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": "gen-123", "object": "chat.completion"}));
    });

    let engine = engine_for(&server)?;
    let err = engine
        .submit(&AdvisoryRequest::new("Potato", "Late Blight"))
        .await
        .unwrap_err();

    assert!(matches!(err, AdvisoryError::MalformedResponseError { .. }));
    assert_eq!(err.category(), ErrorCategory::RemoteService);
    Ok(())
}

#[tokio::test]
async fn test_timeout_matches_status_error_category() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path(COMPLETIONS_PATH);
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(completion_body("too late"));
    });

    let settings = AdvisorySettings::new("sk-or-test")
        .with_endpoint(server.url(COMPLETIONS_PATH))
        .with_timeout(Duration::from_millis(250));
    let engine = AdvisoryEngine::from_config(settings)?;

    let timeout_err = engine
        .submit(&AdvisoryRequest::new("Potato", "Late Blight"))
        .await
        .unwrap_err();
    let status_err = AdvisoryError::HttpStatusError {
        status: 401,
        body: String::new(),
    };

    assert!(matches!(timeout_err, AdvisoryError::TimeoutError { .. }));
    assert_eq!(timeout_err.category(), status_err.category());
    assert_eq!(timeout_err.severity(), status_err.severity());
    Ok(())
}
