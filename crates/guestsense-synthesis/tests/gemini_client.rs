use guestsense_core::{RawFeedback, Sentiment};
use guestsense_synthesis::{
    synthesis_output_schema, GeminiClient, ModelClient, SynthesisError, SynthesisService,
    FALLBACK_SOURCE_ID,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-2.0-flash";
const ENDPOINT: &str = "/v1beta/models/gemini-2.0-flash:generateContent";

fn candidate(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{ "content": { "role": "model", "parts": [{ "text": text }] } }]
    })
}

fn client_for(server: &MockServer) -> GeminiClient {
    GeminiClient::new("test-key", format!("{}/v1beta", server.uri())).unwrap()
}

#[tokio::test]
async fn test_gemini_client_sends_key_and_schema() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("{\"ok\":true}")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let text = client
        .generate_json(MODEL, "prompt", &synthesis_output_schema())
        .await
        .unwrap();
    assert_eq!(text, "{\"ok\":true}");
}

#[tokio::test]
async fn test_gemini_client_reports_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503).set_body_string("The model is overloaded."))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .generate_json(MODEL, "prompt", &synthesis_output_schema())
        .await
        .unwrap_err();
    assert!(matches!(err, SynthesisError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_gemini_client_empty_candidates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .generate_json(MODEL, "prompt", &synthesis_output_schema())
        .await
        .unwrap_err();
    assert!(matches!(err, SynthesisError::EmptyResponse));
}

#[tokio::test]
async fn test_service_end_to_end_over_http() {
    let server = MockServer::start().await;
    let model_output = json!({
        "insights": [
            { "text": "Air conditioning failures recur on floor 2", "sentiment": "Negative" },
            { "text": "Breakfast is well liked", "sentiment": "Positive" }
        ],
        "tasks_to_create": [{
            "summary": "Service floor 2 AC units",
            "details": "Multiple guests report broken AC",
            "priority": "High",
            "status": "Pending",
            "source_feedback_id": "f-1"
        }],
        "drafted_responses": [{
            "topic": "Air conditioning",
            "draft_text": "We are sorry about the AC in your room.",
            "source_feedback_id": "f-1"
        }]
    });
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(candidate(&model_output.to_string())),
        )
        .mount(&server)
        .await;

    let service = SynthesisService::new(
        Some(Arc::new(client_for(&server))),
        MODEL,
        Duration::from_secs(5),
    );
    let batch = vec![
        RawFeedback::with_id("f-1", "AC broken in 204"),
        RawFeedback::with_id("f-2", "Loved the breakfast"),
    ];
    let outcome = service.run(&batch).await;
    assert!(!outcome.is_fallback());
    let output = outcome.into_output();
    assert_eq!(output.insights.len(), 2);
    assert_eq!(output.insights[1].sentiment, Sentiment::Positive);
    assert_eq!(output.tasks_to_create.len(), 1);
    assert_eq!(output.drafted_responses.len(), 1);
}

#[tokio::test]
async fn test_service_falls_back_on_slow_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate("{}"))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let service = SynthesisService::new(
        Some(Arc::new(client_for(&server))),
        MODEL,
        Duration::from_millis(100),
    );
    let output = service
        .synthesize(&[RawFeedback::with_id("f-1", "Slow elevator")])
        .await;
    assert_eq!(output.tasks_to_create[0].source_feedback_id, FALLBACK_SOURCE_ID);
    assert!(output.tasks_to_create[0].details.contains("timed out"));
}
