use super::types::{ApiError, Forecast};
use crate::{Error, Result, config::WeatherConfig};
use tracing::debug;

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m";
const DAILY_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,precipitation_probability_max";

/// Client for the Open-Meteo forecast API.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(config: WeatherConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn forecast(&self, latitude: f64, longitude: f64) -> Result<Forecast> {
        let url = format!("{}/forecast", self.base_url);
        debug!("Fetching forecast for {}, {}", latitude, longitude);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = response
                .json::<ApiError>()
                .await
                .ok()
                .and_then(|body| body.reason)
                .unwrap_or_else(|| status.to_string());
            return Err(Error::weather(reason));
        }

        Ok(response.json::<Forecast>().await?)
    }
}
