use super::types::{
    ChatRequest, MandiQuery, PestQueryRequest, RecommendRequest, Upload, WeatherRequest,
};
use crate::{
    Error, Result,
    llm::LlmClient,
    mandi::{self, MandiQuote},
    pipeline,
    prompt::{self, Language, Location},
    weather::WeatherClient,
};
use axum::{
    extract::{Multipart, Query, State},
    response::Json,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

pub const UPLOAD_FIELD: &str = "file";
pub const NO_FILE: &str = "No file uploaded.";
pub const CHAT_FALLBACK: &str = "Service is busy. Please try again.";
pub const CHAT_VOICE_FALLBACK: &str = "Sorry, I could not understand the audio. Please try again.";

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
    pub weather: WeatherClient,
}

pub async fn status() -> Json<Value> {
    Json(json!({
        "status": "Online",
        "message": "FarmShield Brain is Active"
    }))
}

pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Json<Value> {
    info!("Received crop recommendation request");

    let result = async {
        let location = Location::resolve(
            request.location_name.as_deref(),
            request.latitude,
            request.longitude,
        )?;
        let month = chrono::Local::now().format("%B").to_string();
        let prompt = prompt::crop_recommendation(&location, &month);
        pipeline::structured(state.llm.as_ref(), &prompt).await
    }
    .await;

    Json(pipeline::into_payload(result))
}

pub async fn pest_scan(State(state): State<AppState>, mut multipart: Multipart) -> Json<Value> {
    info!("Received pest scan upload");

    let result = async {
        let upload = read_upload(&mut multipart, "image/jpeg").await?;
        let prompt = prompt::pest_scan(&upload.mime_type, upload.data);
        pipeline::structured(state.llm.as_ref(), &prompt).await
    }
    .await;

    Json(pipeline::into_payload(result))
}

pub async fn pest_query(
    State(state): State<AppState>,
    Json(request): Json<PestQueryRequest>,
) -> Json<Value> {
    info!("Received pest query ({})", request.language);

    let prompt = prompt::pest_query(&request.query, Language::from_tag(&request.language));
    let result = pipeline::free_text(state.llm.as_ref(), &prompt, "solution").await;

    Json(pipeline::into_payload(result))
}

pub async fn pest_query_voice(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Json<Value> {
    info!("Received pest voice query");

    let result = async {
        let upload = read_upload(&mut multipart, "audio/mp3").await?;
        let prompt = prompt::pest_voice(&upload.mime_type, upload.data);
        pipeline::free_text(state.llm.as_ref(), &prompt, "solution").await
    }
    .await;

    Json(pipeline::into_payload_with(result, |e| {
        json!({ "error": format!("Audio Error: {}", e) })
    }))
}

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Json<Value> {
    info!("Received chat message ({})", request.language);

    let prompt = prompt::chat(&request.message, Language::from_tag(&request.language));
    let result = pipeline::free_text(state.llm.as_ref(), &prompt, "reply").await;

    Json(pipeline::into_payload_with(result, |_| {
        json!({ "reply": CHAT_FALLBACK })
    }))
}

pub async fn chat_voice(State(state): State<AppState>, mut multipart: Multipart) -> Json<Value> {
    info!("Received voice chat message");

    let result = async {
        let upload = read_upload(&mut multipart, "audio/mp3").await?;
        let prompt = prompt::chat_voice(&upload.mime_type, upload.data);
        pipeline::free_text(state.llm.as_ref(), &prompt, "reply").await
    }
    .await;

    Json(pipeline::into_payload_with(result, |_| {
        json!({ "reply": CHAT_VOICE_FALLBACK })
    }))
}

pub async fn weather(
    State(state): State<AppState>,
    Json(request): Json<WeatherRequest>,
) -> Json<Value> {
    info!(
        "Received weather request for {}, {}",
        request.latitude, request.longitude
    );

    Json(pipeline::into_payload(weather_advisory(&state, &request).await))
}

async fn weather_advisory(state: &AppState, request: &WeatherRequest) -> Result<Value> {
    let forecast = state
        .weather
        .forecast(request.latitude, request.longitude)
        .await?;
    let conditions = forecast.current_conditions();

    let prompt = prompt::weather_tip(&conditions);
    let mut advice = pipeline::free_text(state.llm.as_ref(), &prompt, "ai_advice").await?;

    Ok(json!({
        "temperature": conditions.temperature,
        "humidity": conditions.humidity,
        "wind_speed": conditions.wind_speed,
        "weather_code": conditions.weather_code,
        "ai_advice": advice["ai_advice"].take(),
        "forecast": forecast.daily_or_empty(),
    }))
}

pub async fn mandi_rates(Query(query): Query<MandiQuery>) -> Json<Vec<MandiQuote>> {
    let state = query.state.as_deref().unwrap_or(mandi::DEFAULT_STATE);
    info!("Received mandi rates request for {}", state);

    let today = chrono::Local::now().date_naive();
    Json(mandi::quotes(state, today, &mut rand::thread_rng()))
}

/// Reads the `file` field of a multipart upload.
async fn read_upload(multipart: &mut Multipart, default_mime: &str) -> Result<Upload> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let mime_type = field
            .content_type()
            .filter(|ct| !ct.is_empty() && *ct != "application/octet-stream")
            .unwrap_or(default_mime)
            .to_string();
        let data = field.bytes().await?;

        if data.is_empty() {
            return Err(Error::invalid_request(NO_FILE));
        }

        info!("Read upload: {} bytes ({})", data.len(), mime_type);
        return Ok(Upload {
            mime_type,
            data: data.to_vec(),
        });
    }

    Err(Error::invalid_request(NO_FILE))
}
