//! HTTP question source and answer sink against a local stub server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use secrecy::Secret;
use serde_json::{json, Value};

use qa_intake::adapters::{HttpAnswerSink, HttpGatewayConfig, HttpQuestionSource};
use qa_intake::domain::foundation::DocumentId;
use qa_intake::domain::intake::{decode_questions, Answer, FetchRequest, Question, SubmitRequest};
use qa_intake::ports::{AnswerSink, GatewayError, QuestionSource};

// =============================================================================
// Test Infrastructure
// =============================================================================

type Seen = Arc<Mutex<Vec<Value>>>;

async fn questions(State(seen): State<Seen>, Json(body): Json<Value>) -> Json<Value> {
    seen.lock().unwrap().push(body);
    Json(json!({
        "questions": [
            {"placeholder": "[name]", "question": "Your name?"},
            {"placeholder": "[city]", "question": "Your city?"}
        ]
    }))
}

async fn questions_as_text() -> Json<Value> {
    Json(json!({
        "questions": "[{\"placeholder\":\"[a]\",\"question\":\"A?\"}]",
        "processed": "false"
    }))
}

async fn receipt(State(seen): State<Seen>, Json(body): Json<Value>) -> Json<Value> {
    seen.lock().unwrap().push(body);
    Json(json!({"status": "queued"}))
}

async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn broken() -> &'static str {
    "<html>not json</html>"
}

async fn busy() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, "busy")
}

async fn slow() -> Json<Value> {
    tokio::time::sleep(Duration::from_secs(3)).await;
    Json(json!({"questions": []}))
}

async fn spawn_stub() -> (String, Seen) {
    let seen: Seen = Arc::default();
    let app = Router::new()
        .route("/questions", post(questions))
        .route("/questions-text", post(questions_as_text))
        .route("/submit", post(receipt))
        .route("/submit-empty", post(no_content))
        .route("/broken", post(broken))
        .route("/busy", post(busy))
        .route("/slow", post(slow))
        .with_state(seen.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), seen)
}

fn gateway(base: &str, questions_path: &str, submit_path: &str) -> HttpGatewayConfig {
    HttpGatewayConfig::new(
        Secret::new(format!("{}{}", base, questions_path)),
        Secret::new(format!("{}{}", base, submit_path)),
    )
}

fn fetch_request() -> FetchRequest {
    FetchRequest {
        document_id: DocumentId::new("doc-9").unwrap(),
    }
}

fn submit_request() -> SubmitRequest {
    SubmitRequest {
        document_id: DocumentId::new("doc-9").unwrap(),
        answers: vec![Answer::for_question(&Question::new("[name]", "Your name?"), "Grace")],
    }
}

// =============================================================================
// Question source
// =============================================================================

#[tokio::test]
async fn fetch_posts_document_id_and_decodes_questions() {
    let (base, seen) = spawn_stub().await;
    let source = HttpQuestionSource::new(&gateway(&base, "/questions", "/submit")).unwrap();

    let payload = source.fetch_questions(&fetch_request()).await.unwrap();

    assert_eq!(seen.lock().unwrap()[0], json!({"documentId": "doc-9"}));
    let questions = decode_questions(&payload.questions).unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[1], Question::new("[city]", "Your city?"));
    assert!(!payload.is_processed());
}

#[tokio::test]
async fn fetch_accepts_questions_serialized_as_text() {
    let (base, _) = spawn_stub().await;
    let source = HttpQuestionSource::new(&gateway(&base, "/questions-text", "/submit")).unwrap();

    let payload = source.fetch_questions(&fetch_request()).await.unwrap();

    assert_eq!(decode_questions(&payload.questions).unwrap().len(), 1);
    assert!(!payload.is_processed());
}

#[tokio::test]
async fn non_json_body_is_a_parse_error() {
    let (base, _) = spawn_stub().await;
    let source = HttpQuestionSource::new(&gateway(&base, "/broken", "/submit")).unwrap();

    let result = source.fetch_questions(&fetch_request()).await;

    assert!(matches!(result, Err(GatewayError::Parse(_))));
}

#[tokio::test]
async fn error_status_carries_code_and_body() {
    let (base, _) = spawn_stub().await;
    let source = HttpQuestionSource::new(&gateway(&base, "/busy", "/submit")).unwrap();

    let result = source.fetch_questions(&fetch_request()).await;

    assert_eq!(result, Err(GatewayError::status(503, "busy")));
}

#[tokio::test]
async fn slow_endpoint_times_out() {
    let (base, _) = spawn_stub().await;
    let config = gateway(&base, "/slow", "/submit").with_timeout(Duration::from_secs(1));
    let source = HttpQuestionSource::new(&config).unwrap();

    let result = source.fetch_questions(&fetch_request()).await;

    assert_eq!(result, Err(GatewayError::Timeout { timeout_secs: 1 }));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let source =
        HttpQuestionSource::new(&gateway(&format!("http://{}", addr), "/q", "/s")).unwrap();

    let result = source.fetch_questions(&fetch_request()).await;

    assert!(matches!(result, Err(GatewayError::Network(_))));
}

// =============================================================================
// Answer sink
// =============================================================================

#[tokio::test]
async fn submit_posts_every_answer() {
    let (base, seen) = spawn_stub().await;
    let sink = HttpAnswerSink::new(&gateway(&base, "/questions", "/submit")).unwrap();

    let receipt = sink.submit_answers(&submit_request()).await.unwrap();

    assert_eq!(
        seen.lock().unwrap()[0],
        json!({
            "documentId": "doc-9",
            "answers": [{"placeholder": "[name]", "question": "Your name?", "answer": "Grace"}]
        })
    );
    assert_eq!(receipt.body, Some(json!({"status": "queued"})));
}

#[tokio::test]
async fn empty_success_gives_empty_receipt() {
    let (base, _) = spawn_stub().await;
    let sink = HttpAnswerSink::new(&gateway(&base, "/questions", "/submit-empty")).unwrap();

    let receipt = sink.submit_answers(&submit_request()).await.unwrap();

    assert_eq!(receipt.body, None);
}

#[tokio::test]
async fn submit_failure_status_is_reported() {
    let (base, _) = spawn_stub().await;
    let sink = HttpAnswerSink::new(&gateway(&base, "/questions", "/busy")).unwrap();

    let result = sink.submit_answers(&submit_request()).await;

    assert_eq!(result, Err(GatewayError::status(503, "busy")));
}
