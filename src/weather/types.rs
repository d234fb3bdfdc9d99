use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Subset of the Open-Meteo forecast response the advisory uses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Forecast {
    #[serde(default)]
    pub current: CurrentBlock,
    /// Daily block, passed through untouched.
    #[serde(default)]
    pub daily: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentBlock {
    #[serde(default)]
    pub temperature_2m: Option<Number>,
    #[serde(default)]
    pub relative_humidity_2m: Option<Number>,
    #[serde(default)]
    pub wind_speed_10m: Option<Number>,
    #[serde(default)]
    pub weather_code: Option<Number>,
}

/// Error body Open-Meteo returns with a 4xx status.
#[derive(Debug, Deserialize)]
pub(super) struct ApiError {
    #[serde(default)]
    pub reason: Option<String>,
}

/// Readings keep the number representation the API sent (`71` stays `71`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentConditions {
    pub temperature: Number,
    pub humidity: Number,
    pub wind_speed: Number,
    pub weather_code: Number,
}

impl Default for CurrentConditions {
    fn default() -> Self {
        Self {
            temperature: Number::from(0),
            humidity: Number::from(0),
            wind_speed: Number::from(0),
            weather_code: Number::from(0),
        }
    }
}

impl Forecast {
    /// Current conditions with missing readings reported as zero.
    pub fn current_conditions(&self) -> CurrentConditions {
        let reading = |value: &Option<Number>| value.clone().unwrap_or_else(|| Number::from(0));

        CurrentConditions {
            temperature: reading(&self.current.temperature_2m),
            humidity: reading(&self.current.relative_humidity_2m),
            wind_speed: reading(&self.current.wind_speed_10m),
            weather_code: reading(&self.current.weather_code),
        }
    }

    pub fn daily_or_empty(&self) -> Value {
        self.daily
            .clone()
            .unwrap_or_else(|| Value::Object(Default::default()))
    }
}
