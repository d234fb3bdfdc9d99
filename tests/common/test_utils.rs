use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use farmshield_brain::{
    config::{ServerConfig, WeatherConfig},
    server::{self, handlers::AppState},
    weather::WeatherClient,
};
use serde_json::Value;
use std::sync::Arc;

pub const BOUNDARY: &str = "farmshield-test-boundary";

/// Weather endpoint nobody listens on, for tests that never reach it.
pub const UNUSED_WEATHER_URL: &str = "http://127.0.0.1:9";

/// Create the application router backed by a mock model and the given weather API
pub fn create_test_app(llm: MockLlmClient, weather_url: &str) -> Router {
    create_test_app_with_limit(llm, weather_url, ServerConfig::default().max_upload_bytes())
}

/// Same as [`create_test_app`] with an explicit request body limit
pub fn create_test_app_with_limit(
    llm: MockLlmClient,
    weather_url: &str,
    max_upload_bytes: usize,
) -> Router {
    let state = AppState {
        llm: Arc::new(llm),
        weather: WeatherClient::new(WeatherConfig {
            base_url: weather_url.to_string(),
        }),
    };
    server::router(state, max_upload_bytes)
}

pub fn json_request(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a multipart/form-data request with a single file field
pub fn multipart_request(
    uri: &str,
    field: &str,
    content_type: &str,
    data: &[u8],
) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"upload.bin\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
