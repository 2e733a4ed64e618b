//! Runs the client against a throwaway local endpoint.

use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use questwright_core::{ChatMessage, CompletionRequest};
use questwright_error::{GenerationErrorKind, QuestwrightErrorKind};
use questwright_interface::CompletionDriver;
use questwright_models::{ClientConfig, OpenAiClient};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

type Captured = Arc<Mutex<Vec<(Option<String>, Value)>>>;

/// Serve `router` on an ephemeral port, returning its base URL.
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/v1", addr)
}

fn capturing_endpoint(reply: Value, captured: Captured) -> Router {
    Router::new().route(
        "/v1/chat/completions",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let captured = captured.clone();
            let reply = reply.clone();
            async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                captured.lock().unwrap().push((auth, body));
                Json(reply)
            }
        }),
    )
}

fn request() -> CompletionRequest {
    CompletionRequest {
        model: "gpt-3.5-turbo".to_string(),
        messages: vec![ChatMessage::user("Write a one-shot.")],
        temperature: 0.7,
        max_tokens: 3000,
    }
}

#[tokio::test]
async fn sends_bearer_key_and_model_settings() {
    let captured: Captured = Arc::default();
    let reply = json!({
        "id": "chatcmpl-1",
        "model": "gpt-3.5-turbo-0125",
        "choices": [{"index": 0, "message": {"role": "assistant", "content": "\n## Prologue\nRain.\n"}, "finish_reason": "stop"}],
        "usage": {"prompt_tokens": 120, "completion_tokens": 40, "total_tokens": 160}
    });
    let base_url = spawn(capturing_endpoint(reply, captured.clone())).await;
    let client = OpenAiClient::new(ClientConfig::new(base_url, "sk-test"));

    let response = client.complete(&request()).await.unwrap();

    assert_eq!(response.text, "## Prologue\nRain.");
    assert_eq!(response.model, "gpt-3.5-turbo-0125");
    assert_eq!(*response.usage.unwrap().total_tokens(), 160);

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    let (auth, body) = &captured[0];
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(body["model"], "gpt-3.5-turbo");
    assert_eq!(body["max_tokens"], 3000);
    assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    assert_eq!(body["messages"][0]["role"], "user");
}

#[tokio::test]
async fn non_success_status_is_api_error() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, "slow down") }),
    );
    let base_url = spawn(router).await;
    let client = OpenAiClient::new(ClientConfig::new(base_url, "sk-test"));

    let err = client.complete(&request()).await.unwrap_err();
    match err.kind() {
        QuestwrightErrorKind::Generation(e) => match &e.kind {
            GenerationErrorKind::Api { status, message } => {
                assert_eq!(*status, 429);
                assert_eq!(message, "slow down");
            }
            other => panic!("unexpected kind: {other}"),
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn empty_choices_is_empty_response() {
    let captured: Captured = Arc::default();
    let base_url = spawn(capturing_endpoint(json!({"choices": []}), captured)).await;
    let client = OpenAiClient::new(ClientConfig::new(base_url, "sk-test"));

    let err = client.complete(&request()).await.unwrap_err();
    assert!(matches!(
        err.kind(),
        QuestwrightErrorKind::Generation(e) if e.kind == GenerationErrorKind::EmptyResponse
    ));
}

#[tokio::test]
async fn malformed_body_is_deserialization_error() {
    let router = Router::new().route(
        "/v1/chat/completions",
        post(|| async { "not json" }),
    );
    let base_url = spawn(router).await;
    let client = OpenAiClient::new(ClientConfig::new(base_url, "sk-test"));

    let err = client.complete(&request()).await.unwrap_err();
    assert!(matches!(
        err.kind(),
        QuestwrightErrorKind::Generation(e)
            if matches!(e.kind, GenerationErrorKind::Deserialization(_))
    ));
}

#[tokio::test]
async fn unreachable_endpoint_is_http_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = OpenAiClient::new(ClientConfig::new(format!("http://{}/v1", addr), "sk-test"));

    let err = client.complete(&request()).await.unwrap_err();
    assert!(matches!(
        err.kind(),
        QuestwrightErrorKind::Generation(e) if matches!(e.kind, GenerationErrorKind::Http(_))
    ));
}

#[tokio::test]
async fn truncated_error_body_falls_back_to_reason_phrase() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 64 * 1024];
        let _ = socket.read(&mut buf).await;
        // Promise more bytes than are sent, then hang up.
        socket
            .write_all(b"HTTP/1.1 502 Bad Gateway\r\ncontent-length: 100\r\n\r\nshort")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });
    let client = OpenAiClient::new(ClientConfig::new(format!("http://{}/v1", addr), "sk-test"));

    let err = client.complete(&request()).await.unwrap_err();
    match err.kind() {
        QuestwrightErrorKind::Generation(e) => match &e.kind {
            GenerationErrorKind::Api { status, message } => {
                assert_eq!(*status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected kind: {other}"),
        },
        other => panic!("unexpected error: {other}"),
    }
}
