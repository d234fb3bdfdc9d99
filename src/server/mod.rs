pub mod handlers;
pub mod types;

use crate::{Result, config::Config, llm::OpenAiClient, weather::WeatherClient};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Builds the application router over the given state. Request bodies up to
/// `max_upload_bytes` are accepted, replacing axum's 2 MB default.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::status))
        .route("/api/recommend", post(handlers::recommend))
        .route("/api/pest-scan", post(handlers::pest_scan))
        .route("/api/pest-query", post(handlers::pest_query))
        .route("/api/pest-query-voice", post(handlers::pest_query_voice))
        .route("/api/chat", post(handlers::chat))
        .route("/api/chat-voice", post(handlers::chat_voice))
        .route("/api/weather", post(handlers::weather))
        .route("/api/mandi", get(handlers::mandi_rates))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let llm = OpenAiClient::connect(config.llm.clone()).await;

    let app_state = AppState {
        llm: Arc::new(llm),
        weather: WeatherClient::new(config.weather.clone()),
    };

    let app = router(app_state, config.server.max_upload_bytes());

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
