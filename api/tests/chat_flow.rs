use std::sync::Arc;

use ai_llm_service::{GeminiService, LlmModelConfig};
use api::{AppState, build_router};
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use contextor::{Contextor, llm::FAILURE_FALLBACK};
use faq_store::{FaqItem, FaqStore};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{body_string_contains, header as header_eq, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PCCOER_ANSWER: &str = "Pimpri Chinchwad College of Engineering and Research, Ravet.";

fn app(endpoint: String) -> Router {
    let svc = GeminiService::new(LlmModelConfig {
        model: "gemini-1.5-flash".into(),
        endpoint,
        api_key: "test-key".into(),
        max_tokens: None,
        temperature: None,
        top_p: None,
        timeout_secs: Some(5),
    })
    .unwrap();
    let faq = FaqStore::from_items(vec![
        FaqItem::new("What is PCCOER?", PCCOER_ANSWER),
        FaqItem::new("Is hostel available?", "Yes, separate hostels for boys and girls."),
    ]);
    let contextor = Contextor::from_parts(Arc::new(faq), Arc::new(svc));
    build_router(AppState::new(Arc::new(contextor)))
}

fn post_chat(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(res: axum::response::Response) -> Value {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn gemini_text(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    }))
}

#[tokio::test]
async fn chat_without_message_is_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(gemini_text("x")).expect(0).mount(&server).await;

    let res = app(server.uri()).oneshot(post_chat("{}")).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res).await["error"], "No message provided");
}

#[tokio::test]
async fn chat_with_blank_message_is_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(gemini_text("x")).expect(0).mount(&server).await;

    let res = app(server.uri())
        .oneshot(post_chat(r#"{"message":"   "}"#))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res).await["error"], "No message provided");
}

#[tokio::test]
async fn chat_with_broken_json_is_bad_request() {
    let server = MockServer::start().await;

    let res = app(server.uri())
        .oneshot(post_chat("not json at all"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = json_body(res).await;
    assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON data"));
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn chat_without_json_content_type_is_bad_request() {
    let server = MockServer::start().await;
    let req = Request::builder()
        .method("POST")
        .uri("/chat")
        .body(Body::from(r#"{"message":"hi"}"#))
        .unwrap();

    let res = app(server.uri()).oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(res).await["error"], "No JSON data provided");
}

#[tokio::test]
async fn chat_rejects_oversized_session_id() {
    let server = MockServer::start().await;
    let body = json!({ "message": "hello", "session_id": "s".repeat(200) }).to_string();

    let res = app(server.uri()).oneshot(post_chat(&body)).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn exact_faq_question_is_answered_without_the_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST")).respond_with(gemini_text("x")).expect(0).mount(&server).await;

    let res = app(server.uri())
        .oneshot(post_chat(r#"{"message":"What is PCCOER?"}"#))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await, json!({ "response": PCCOER_ANSWER }));
}

#[tokio::test]
async fn unmatched_query_is_answered_by_the_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(header_eq("x-goog-api-key", "test-key"))
        .and(body_string_contains("User's Current Question: Tell me about placements"))
        .respond_with(gemini_text("Placements are strong.\n"))
        .expect(1)
        .mount(&server)
        .await;

    let res = app(server.uri())
        .oneshot(post_chat(r#"{"message":"Tell me about placements"}"#))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await["response"], "Placements are strong.");
}

#[tokio::test]
async fn upstream_failure_still_returns_ok_with_apology() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let res = app(server.uri())
        .oneshot(post_chat(r#"{"message":"Tell me about placements"}"#))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(json_body(res).await["response"], FAILURE_FALLBACK);
}

#[tokio::test]
async fn health_reports_working_model_and_faq_count() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_string_contains("Hello, are you working?"))
        .respond_with(gemini_text("Yes."))
        .expect(1)
        .mount(&server)
        .await;

    let res = app(server.uri()).oneshot(get("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        json_body(res).await,
        json!({ "status": "healthy", "gemini_api": "working", "faq_items": 2 })
    );
}

#[tokio::test]
async fn health_reports_upstream_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let res = app(server.uri()).oneshot(get("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(res).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["gemini_api"], "error");
    assert_eq!(body["faq_items"], 2);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn index_serves_chat_page() {
    let server = MockServer::start().await;

    let res = app(server.uri()).oneshot(get("/")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let ctype = res.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(ctype.starts_with("text/html"));
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/static/script.js"));
}

#[tokio::test]
async fn script_is_served_as_javascript() {
    let server = MockServer::start().await;

    let res = app(server.uri()).oneshot(get("/static/script.js")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let ctype = res.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(ctype.starts_with("application/javascript"));
}
