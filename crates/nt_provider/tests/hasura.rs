use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use nt_core::{ProviderConfig, SummaryProvider, ViewController, ViewState};
use nt_provider::HasuraProvider;
use serde_json::{json, Value};

struct MockProvider {
    status: StatusCode,
    body: String,
    seen: Mutex<Vec<(HeaderMap, Value)>>,
}

async fn graphql(
    State(mock): State<Arc<MockProvider>>,
    headers: HeaderMap,
    Json(request): Json<Value>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    mock.seen.lock().unwrap().push((headers, request));
    (
        mock.status,
        [(header::CONTENT_TYPE, "application/json")],
        mock.body.clone(),
    )
}

async fn spawn_mock(status: StatusCode, body: impl Into<String>) -> (ProviderConfig, Arc<MockProvider>) {
    let mock = Arc::new(MockProvider {
        status,
        body: body.into(),
        seen: Mutex::new(Vec::new()),
    });
    let app = Router::new()
        .route("/v1/graphql", post(graphql))
        .with_state(mock.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ProviderConfig::new(&format!("http://{}/v1/graphql", addr), "test-secret").unwrap();
    (config, mock)
}

#[tokio::test]
async fn sends_query_with_secret_header() {
    let body = json!({"data": {"summaries": [
        {"id": "b", "summary": "two", "sentiment": "negative", "explanation": "",
         "Article": {"title": "T", "url": "https://news.test/b", "source": "S"}},
        {"id": "a", "summary": "one", "sentiment": null, "explanation": null, "Article": null}
    ]}});
    let (config, mock) = spawn_mock(StatusCode::OK, body.to_string()).await;

    let provider = HasuraProvider::new(config).unwrap();
    let records = provider.fetch_summaries().await.unwrap();

    let ids: Vec<_> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_eq!(records[0].article.as_ref().unwrap().source.as_deref(), Some("S"));
    assert!(records[1].article.is_none());

    let seen = mock.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (headers, request) = &seen[0];
    assert_eq!(headers["x-hasura-admin-secret"], "test-secret");
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
    let query = request["query"].as_str().unwrap();
    for field in ["summaries", "id", "summary", "sentiment", "explanation", "Article", "title", "url", "source"] {
        assert!(query.contains(field), "query is missing {}", field);
    }
}

#[tokio::test]
async fn custom_secret_header() {
    let (config, mock) = spawn_mock(StatusCode::OK, r#"{"data": {"summaries": []}}"#).await;
    let provider = HasuraProvider::new(config.with_secret_header("x-api-key")).unwrap();

    assert!(provider.fetch_summaries().await.unwrap().is_empty());
    let seen = mock.seen.lock().unwrap();
    assert_eq!(seen[0].0["x-api-key"], "test-secret");
    assert!(seen[0].0.get("x-hasura-admin-secret").is_none());
}

#[tokio::test]
async fn reported_error_becomes_error_state() {
    let (config, _mock) = spawn_mock(StatusCode::OK, r#"{"errors": [{"message": "boom"}]}"#).await;
    let provider = Arc::new(HasuraProvider::new(config).unwrap());

    let mut controller = ViewController::mount(provider);
    assert_eq!(
        controller.settled().await,
        ViewState::Error { message: "boom".to_string() }
    );
}

#[tokio::test]
async fn empty_result_is_ready() {
    let (config, _mock) = spawn_mock(StatusCode::OK, r#"{"data": {"summaries": []}}"#).await;
    let provider = Arc::new(HasuraProvider::new(config).unwrap());

    let mut controller = ViewController::mount(provider);
    assert_eq!(controller.settled().await, ViewState::Ready { records: vec![] });
}

#[tokio::test]
async fn server_error_page_is_transport_error() {
    let (config, _mock) = spawn_mock(StatusCode::INTERNAL_SERVER_ERROR, "<h1>oops</h1>").await;
    let provider = HasuraProvider::new(config).unwrap();

    let err = provider.fetch_summaries().await.unwrap_err();
    assert!(!err.is_provider_reported());
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn connection_refused_then_reload() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ProviderConfig::new(&format!("http://{}/v1/graphql", addr), "secret").unwrap();
    let provider = Arc::new(HasuraProvider::new(config).unwrap());

    let mut controller = ViewController::mount(provider);
    match controller.settled().await {
        ViewState::Error { message } => assert!(!message.is_empty()),
        other => panic!("expected error state, got {:?}", other),
    }

    let controller = controller.reload();
    assert_eq!(controller.state(), ViewState::Loading);
}
