use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use questwright_core::{
    CompletionRequest, CompletionResponse, CostEstimator, EstimatorWeights, ModelSelection,
};
use questwright_error::{GenerationError, GenerationErrorKind, QuestwrightResult};
use questwright_interface::CompletionDriver;
use questwright_server::{AppState, GENERATION_FAILED, create_router};
use serde_json::{Value, json};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tower::ServiceExt;

/// Counts calls and answers with a fixed outcome.
struct CountingDriver {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingDriver {
    fn succeeding() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: false,
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            fail: true,
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionDriver for CountingDriver {
    async fn complete(&self, req: &CompletionRequest) -> QuestwrightResult<CompletionResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(GenerationError::new(GenerationErrorKind::Api {
                status: 401,
                message: "invalid api key sk-leaked".to_string(),
            })
            .into());
        }
        Ok(CompletionResponse {
            text: "## Prologue\nThe bells of Harrowmere fall silent.".to_string(),
            model: req.model.clone(),
            usage: None,
        })
    }

    fn provider_name(&self) -> &'static str {
        "counting"
    }
}

fn app(driver: Arc<CountingDriver>) -> Router {
    create_router(AppState::new(driver, ModelSelection::default(), 0.7, 15))
}

fn valid_body() -> Value {
    json!({
        "genre": "High Fantasy",
        "tone": "Dark",
        "worldStyle": "Standard Fantasy",
        "ruleset": "5e",
        "experienceLevel": "novice",
        "theme": "Undead Invasion",
        "numberOfPlayers": 4,
        "averagePlayerLevel": 5,
        "structure": ["Combat", "Puzzle"],
        "detailLevel": "medium"
    })
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn generates_adventure() {
    let driver = CountingDriver::succeeding();
    let (status, body) = send(
        app(driver.clone()),
        Method::POST,
        "/api/generate-adventure",
        Some(valid_body()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["result"].as_str().unwrap().starts_with("## Prologue"));
    assert_eq!(driver.calls(), 1);
}

#[tokio::test]
async fn missing_structure_is_rejected_without_calling_driver() {
    let driver = CountingDriver::succeeding();
    let mut body = valid_body();
    body.as_object_mut().unwrap().remove("structure");

    let (status, body) = send(
        app(driver.clone()),
        Method::POST,
        "/api/generate-adventure",
        Some(body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Invalid or missing scene structure"}));
    assert_eq!(driver.calls(), 0);
}

#[tokio::test]
async fn non_array_structure_is_rejected() {
    let driver = CountingDriver::succeeding();
    let mut body = valid_body();
    body["structure"] = json!("Combat");

    let (status, body) = send(
        app(driver.clone()),
        Method::POST,
        "/api/generate-adventure",
        Some(body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid or missing scene structure");
    assert_eq!(driver.calls(), 0);
}

#[tokio::test]
async fn unknown_scene_type_is_named() {
    let driver = CountingDriver::succeeding();
    let mut body = valid_body();
    body["structure"] = json!(["Combat", "Heist"]);

    let (status, body) = send(
        app(driver.clone()),
        Method::POST,
        "/api/generate-adventure",
        Some(body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Heist"));
    assert_eq!(driver.calls(), 0);
}

#[tokio::test]
async fn too_many_scenes_is_rejected() {
    let driver = CountingDriver::succeeding();
    let mut body = valid_body();
    body["structure"] = json!(vec!["Combat"; 16]);

    let (status, _) = send(
        app(driver.clone()),
        Method::POST,
        "/api/generate-adventure",
        Some(body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(driver.calls(), 0);
}

#[tokio::test]
async fn unparseable_body_is_bad_request() {
    let driver = CountingDriver::succeeding();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/generate-adventure")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app(driver.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(driver.calls(), 0);
}

#[tokio::test]
async fn driver_failure_is_generic_500() {
    let driver = CountingDriver::failing();
    let (status, body) = send(
        app(driver.clone()),
        Method::POST,
        "/api/generate-adventure",
        Some(valid_body()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": GENERATION_FAILED}));
    assert!(!body.to_string().contains("sk-leaked"));
    assert_eq!(driver.calls(), 1);
}

#[tokio::test]
async fn non_post_is_method_not_allowed() {
    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let (status, body) = send(
            app(CountingDriver::succeeding()),
            method,
            "/api/generate-adventure",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({"error": "Method Not Allowed"}));
    }
}

#[tokio::test]
async fn estimate_reports_selected_profile() {
    let driver = CountingDriver::succeeding();
    let mut body = valid_body();
    body["detailLevel"] = json!("high");

    let (status, body) = send(app(driver.clone()), Method::POST, "/api/estimate", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model"], "gpt-4o");
    assert_eq!(body["maxTokens"], 8000);
    assert!(body["inputTokens"].as_u64().unwrap() > 300);
    assert_eq!(
        body["totalTokens"].as_u64().unwrap(),
        body["inputTokens"].as_u64().unwrap() + body["outputTokens"].as_u64().unwrap()
    );
    assert_eq!(driver.calls(), 0);
}

#[tokio::test]
async fn non_string_detail_level_is_estimated_as_medium() {
    for detail in [json!(null), json!(3)] {
        let mut body = valid_body();
        body["detailLevel"] = detail;

        let (status, body) = send(
            app(CountingDriver::succeeding()),
            Method::POST,
            "/api/estimate",
            Some(body),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["inputTokens"], 685);
    }
}

#[tokio::test]
async fn estimate_uses_configured_weights() {
    let weights = EstimatorWeights {
        base: 0,
        ..EstimatorWeights::default()
    };
    let state = AppState::new(CountingDriver::succeeding(), ModelSelection::default(), 0.7, 15)
        .with_estimator(CostEstimator::new(weights));

    let (status, body) = send(
        create_router(state),
        Method::POST,
        "/api/estimate",
        Some(valid_body()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["inputTokens"], 385);
}

#[tokio::test]
async fn options_lists_catalog() {
    let (status, body) = send(
        app(CountingDriver::succeeding()),
        Method::GET,
        "/api/options",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["maxScenes"], 15);
    assert!(
        body["rulesets"]
            .as_array()
            .unwrap()
            .contains(&json!("Pathfinder"))
    );
    assert_eq!(body["sceneTypes"].as_array().unwrap().len(), 8);
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send(
        app(CountingDriver::succeeding()),
        Method::GET,
        "/health",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}
