use farmshield_brain::{
    Error,
    config::LlmConfig,
    llm::{FALLBACK_MODEL, LlmClient, OpenAiClient, Prompt},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

fn create_test_config(server: &MockServer, model: &str) -> LlmConfig {
    LlmConfig {
        base_url: format!("{}/v1", server.uri()),
        api_key: "test-api-key".to_string(),
        model: model.to_string(),
        temperature: 0.7,
    }
}

fn completion(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gemini-2.5-flash",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn test_generate_content_returns_first_choice_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({ "model": "gemini-2.5-flash" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("Irrigate at dawn.")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(create_test_config(&server, "gemini-2.5-flash"));
    let text = client
        .generate_content(&Prompt::text("Give me a tip."))
        .await
        .unwrap();

    assert_eq!(text, "Irrigate at dawn.");
}

#[tokio::test]
async fn test_generate_content_sends_image_as_data_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(body_partial_json(json!({
            "messages": [{
                "role": "user",
                "content": [
                    { "type": "text", "text": "Analyze this image." },
                    { "type": "image_url", "image_url": { "url": "data:image/png;base64,cG5n" } }
                ]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("{}")))
        .expect(1)
        .mount(&server)
        .await;

    let client = OpenAiClient::new(create_test_config(&server, "gemini-2.5-flash"));
    let prompt = Prompt::text("Analyze this image.").with_media("image/png", b"png".to_vec());

    assert_eq!(client.generate_content(&prompt).await.unwrap(), "{}");
}

#[tokio::test]
async fn test_generate_content_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": "API key not valid. Please pass a valid API key.",
                "type": "invalid_request_error",
                "param": null,
                "code": "400"
            }
        })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(create_test_config(&server, "gemini-2.5-flash"));
    let err = client
        .generate_content(&Prompt::text("hello"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::OpenAi(_)));
    assert!(err.to_string().contains("API key not valid"));
}

#[tokio::test]
async fn test_auto_model_selection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [
                { "id": "models/gemini-1.5-pro", "object": "model", "created": 0, "owned_by": "google" },
                { "id": "models/gemini-1.5-flash", "object": "model", "created": 0, "owned_by": "google" }
            ]
        })))
        .mount(&server)
        .await;

    let client = OpenAiClient::connect(create_test_config(&server, "auto")).await;
    assert_eq!(client.model(), "gemini-1.5-flash");
}

#[tokio::test]
async fn test_auto_model_selection_falls_back_when_listing_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "message": "Not found", "type": "not_found", "param": null, "code": "404" }
        })))
        .mount(&server)
        .await;

    let client = OpenAiClient::connect(create_test_config(&server, "auto")).await;
    assert_eq!(client.model(), FALLBACK_MODEL);
}

#[tokio::test]
async fn test_configured_model_skips_discovery() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = OpenAiClient::connect(create_test_config(&server, "gemini-1.5-pro")).await;
    assert_eq!(client.model(), "gemini-1.5-pro");
}
