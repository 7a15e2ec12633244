use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use actix_web::{test, web, App};
use async_trait::async_trait;
use secrecy::SecretString;
use serde_json::{json, Value};

use tutor_server::{
    app_state::AppState,
    config::{Config, DEFAULT_HF_MODEL},
    constants::prompts::SUMMARY_INSTRUCTION,
    handlers,
    models::domain::{ExtractionFailure, RawInput},
    services::model_service::{InferenceClient, InferenceError},
};

/// Answers like the chat-completion endpoint and counts calls.
struct StubInferenceClient {
    calls: AtomicUsize,
}

impl StubInferenceClient {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InferenceClient for StubInferenceClient {
    async fn generate(&self, prompt: &str, _max_tokens: u32) -> Result<Value, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let content = if prompt.starts_with(SUMMARY_INSTRUCTION) {
            "- The sky is blue."
        } else {
            "1. What colour is the sky?\nA) Blue (correct)\nB) Green\nC) Red\nD) Yellow"
        };
        Ok(json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] }))
    }
}

fn test_config() -> Config {
    Config {
        hf_api_key: SecretString::from("hf_integration_key".to_string()),
        hf_model: DEFAULT_HF_MODEL.to_string(),
        hf_api_base: "http://127.0.0.1:9/v1".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 0,
        text_char_limit: 5000,
        fetch_timeout_secs: 2,
        inference_timeout_secs: 2,
        inference_max_retries: 0,
        max_upload_bytes: 1024 * 1024,
        cors_allowed_origin: None,
    }
}

fn state(client: Arc<StubInferenceClient>) -> AppState {
    AppState::with_inference_client(test_config(), client).unwrap()
}

const SENTINELS: [ExtractionFailure; 5] = [
    ExtractionFailure::NoPdfText,
    ExtractionFailure::UnreadablePdf,
    ExtractionFailure::FetchFailed,
    ExtractionFailure::NoPageText,
    ExtractionFailure::EmptyInput,
];

#[actix_web::test]
async fn test_pasted_text_produces_summary_and_quiz() {
    let client = Arc::new(StubInferenceClient::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state(client.clone())))
            .app_data(handlers::json_config())
            .configure(handlers::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/extract")
        .set_json(json!({ "mode": "text", "value": "The sky is blue." }))
        .to_request();
    let extracted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(extracted["status"], "ready");

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .set_json(json!({ "text": extracted["text"] }))
        .to_request();
    let generated: Value = test::call_and_read_body_json(&app, req).await;

    let summary = generated["summary"]["content"].as_str().unwrap();
    let quiz = generated["quiz"]["content"].as_str().unwrap();
    assert!(!summary.is_empty());
    assert!(!quiz.is_empty());
    for sentinel in SENTINELS {
        assert_ne!(summary, sentinel.to_string());
        assert_ne!(quiz, sentinel.to_string());
    }
    assert_eq!(client.calls(), 2);
}

#[actix_web::test]
async fn test_invalid_url_shows_fetch_failure_in_both_regions() {
    let client = Arc::new(StubInferenceClient::new());
    let state = state(client.clone());

    let (_, materials) = state
        .tutor_service
        .process(RawInput::Url("http://".to_string()))
        .await;

    let sentinel = ExtractionFailure::FetchFailed.to_string();
    assert!(materials.summary.content.contains(&sentinel));
    assert!(materials.quiz.content.contains(&sentinel));
    assert_eq!(client.calls(), 0);
}

#[actix_web::test]
async fn test_index_page_and_health_are_served() {
    let client = Arc::new(StubInferenceClient::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state(client)))
            .configure(handlers::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get().uri("/health").to_request();
    let health: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(health["status"], "healthy");
}

#[actix_web::test]
async fn test_malformed_json_is_bad_request() {
    let client = Arc::new(StubInferenceClient::new());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(state(client)))
            .app_data(handlers::json_config())
            .configure(handlers::configure),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/generate")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
}

#[cfg(test)]
mod sync_tests {
    use super::SENTINELS;

    #[test]
    fn test_sentinel_messages_are_distinct() {
        let mut messages: Vec<String> = SENTINELS.iter().map(|s| s.to_string()).collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), SENTINELS.len());
    }
}
