use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub location_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PestQueryRequest {
    pub query: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct WeatherRequest {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Deserialize)]
pub struct MandiQuery {
    #[serde(default)]
    pub state: Option<String>,
}

/// A file read from a multipart upload.
#[derive(Debug)]
pub struct Upload {
    pub mime_type: String,
    pub data: Vec<u8>,
}

fn default_language() -> String {
    "en".to_string()
}
