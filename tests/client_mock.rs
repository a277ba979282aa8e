//! Integration tests for the HTTP transport against a mock server.

use copyforge::{ContentClientBuilder, ContentRequest, ContentType};
use std::sync::Once;
use std::time::Duration;

static TRACING: Once = Once::new();

/// Log absorbed upstream faults when RUST_LOG is set, e.g.
/// `RUST_LOG=copyforge=debug cargo test -- --nocapture`.
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

fn completion_body(content_json: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content_json},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

#[tokio::test]
async fn upstream_completion_is_parsed_into_content() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let reply = r##"{"title": "Vereinssoftware im Vergleich", "content": "# Überblick\nText.", "excerpt": "Ein Vergleich.", "keywords": ["software", "verein", "vergleich", "auswahl", "praxis"]}"##;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(reply))
        .expect(1)
        .create_async()
        .await;

    let client = ContentClientBuilder::new()
        .api_key("test-key")
        .base_url(server.url())
        .build()
        .unwrap();

    let request = ContentRequest::new("Vereinssoftware", ContentType::BlogPost).unwrap();
    let copy = client.generate(&request).await;

    assert_eq!(copy.title, "Vereinssoftware im Vergleich");
    assert_eq!(copy.keywords.len(), 5);

    // Second call is served from cache; the mock's expect(1) pins that.
    let again = client.generate(&request).await;
    assert_eq!(copy, again);
    mock.assert_async().await;
}

#[tokio::test]
async fn fenced_completion_is_still_parsed() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let reply = "Here you go:\n```json\n{\"title\": \"T\", \"content\": \"# H\\nBody\", \"excerpt\": \"E\", \"keywords\": [\"a\",\"b\",\"c\",\"d\",\"e\"]}\n```";
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(reply))
        .create_async()
        .await;

    let client = ContentClientBuilder::new()
        .api_key("test-key")
        .base_url(server.url())
        .build()
        .unwrap();

    let request = ContentRequest::new("Thema", ContentType::BlogPost).unwrap();
    let copy = client.generate(&request).await;
    assert_eq!(copy.title, "T");
}

#[tokio::test]
async fn upstream_error_degrades_to_fallback() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(500)
        .with_body("internal error")
        .expect(1)
        .create_async()
        .await;

    let client = ContentClientBuilder::new()
        .api_key("test-key")
        .base_url(server.url())
        .build()
        .unwrap();

    let request = ContentRequest::new("Vereinsdigitalisierung", ContentType::ServiceDescription)
        .unwrap();
    let copy = client.generate(&request).await;

    // No error escapes; the caller sees presentable fallback copy.
    assert!(copy.title.contains("Vereinsdigitalisierung"));
    assert!(copy.content.contains('#'));
    assert_eq!(copy.keywords.len(), 5);
}

#[tokio::test]
async fn malformed_completion_degrades_to_fallback() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Sorry, I can only answer in plain prose."))
        .create_async()
        .await;

    let client = ContentClientBuilder::new()
        .api_key("test-key")
        .base_url(server.url())
        .build()
        .unwrap();

    let request = ContentRequest::new("Mitgliederpflege", ContentType::BlogPost).unwrap();
    let copy = client.generate(&request).await;

    assert!(copy.title.contains("Mitgliederpflege"));
    assert_eq!(copy.keywords.len(), 5);
}

#[tokio::test]
async fn missing_completion_content_degrades_to_fallback() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    // A 200 whose body carries no choices/message shape at all.
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{}")
        .create_async()
        .await;

    let client = ContentClientBuilder::new()
        .api_key("test-key")
        .base_url(server.url())
        .upstream_timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let request = ContentRequest::new("Satzung", ContentType::AboutSection).unwrap();
    let copy = client.generate(&request).await;
    assert!(!copy.content.is_empty());
}

#[tokio::test]
async fn request_body_carries_contract_fields() {
    init_tracing();
    let mut server = mockito::Server::new_async().await;
    let reply = r#"{"title": "T", "content": "B", "excerpt": "E", "keywords": ["a","b","c","d","e"]}"#;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_body(mockito::Matcher::PartialJson(serde_json::json!({
            "model": "gpt-4o-mini",
            "temperature": 0.7,
            "response_format": {"type": "json_object"},
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(reply))
        .expect(1)
        .create_async()
        .await;

    let client = ContentClientBuilder::new()
        .api_key("test-key")
        .base_url(server.url())
        .build()
        .unwrap();

    let request = ContentRequest::new("Beitragsordnung", ContentType::CaseStudy).unwrap();
    client.generate(&request).await;
    mock.assert_async().await;
}
