//! Prompt templates for every endpoint.
//!
//! Builders are pure: the caller supplies everything that varies, including
//! the month name for crop advice, so output is deterministic for a given input.

use crate::{
    Error, Result,
    llm::Prompt,
    weather::CurrentConditions,
};

pub const MISSING_LOCATION: &str = "Please provide either GPS coordinates or a location name.";

#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    Named(String),
    Coordinates { latitude: f64, longitude: f64 },
}

impl Location {
    /// A non-blank name always wins over coordinates.
    pub fn resolve(
        location_name: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Self> {
        if let Some(name) = location_name.map(str::trim).filter(|n| !n.is_empty()) {
            return Ok(Self::Named(name.to_string()));
        }

        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Ok(Self::Coordinates {
                latitude,
                longitude,
            }),
            _ => Err(Error::invalid_request(MISSING_LOCATION)),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Named(name) => format!("I am a farmer in {}.", name),
            Self::Coordinates {
                latitude,
                longitude,
            } => format!(
                "I am a farmer at Latitude: {}, Longitude: {}.",
                latitude, longitude
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    /// Unknown tags fall back to English.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "hi" | "hindi" => Self::Hindi,
            _ => Self::English,
        }
    }

    fn instruction(self) -> &'static str {
        match self {
            Self::Hindi => "Reply in pure Hindi (Devanagari script).",
            Self::English => "Reply in simple English.",
        }
    }
}

pub fn crop_recommendation(location: &Location, month: &str) -> Prompt {
    Prompt::text(format!(
        r#"
{}
Current Month: {}.

Task:
1. Identify the district and the typical soil type for this specific Indian location.
2. Recommend the 3 BEST crops to plant right now.

Return STRICT JSON only (no markdown):
{{
    "location": "District, State",
    "soil_type": "e.g. Black Cotton Soil",
    "soil_characteristics": "Short description of moisture/nutrients",
    "crops": [
        {{ "name": "Crop Name", "reason": "Why it works here", "water_need": "Low/Med/High" }},
        {{ "name": "Crop Name", "reason": "Why it works here", "water_need": "Low/Med/High" }},
        {{ "name": "Crop Name", "reason": "Why it works here", "water_need": "Low/Med/High" }}
    ]
}}
"#,
        location.describe(),
        month
    ))
}

const PEST_SCAN_INSTRUCTIONS: &str = r#"
You are an expert plant pathologist. Analyze this image.
1. Identify the disease/pest (or say Healthy).
2. Explain symptoms in 1 sentence.
3. Give 2 organic/chemical remedies.

Return STRICT JSON:
{
    "diagnosis": "Name",
    "symptoms": "Description",
    "remedy": ["Step 1", "Step 2"],
    "severity": "Low/Medium/High"
}
"#;

pub fn pest_scan(mime_type: &str, image: Vec<u8>) -> Prompt {
    Prompt::text(PEST_SCAN_INSTRUCTIONS).with_media(mime_type, image)
}

pub fn pest_query(query: &str, language: Language) -> Prompt {
    Prompt::text(format!(
        r#"
Farmer's Problem: "{}"
Task: Diagnose and provide a short solution. Keep it conversational.
{}
"#,
        query.trim(),
        language.instruction()
    ))
}

pub fn pest_voice(mime_type: &str, audio: Vec<u8>) -> Prompt {
    Prompt::default().with_media(mime_type, audio).with_text(
        "You are Dr. Crop. Listen to this farmer's problem. Diagnose it and provide a short, \
         practical solution in simple English (or Hindi if spoken).",
    )
}

pub fn chat(message: &str, language: Language) -> Prompt {
    Prompt::text(format!(
        r#"
You are 'Sahayak', an agriculture expert.
User Question: {}

Instructions:
1. {}
2. Keep the answer short, practical, and helpful for a farmer.
3. If using Hindi, use easy-to-understand words.
"#,
        message.trim(),
        language.instruction()
    ))
}

pub fn chat_voice(mime_type: &str, audio: Vec<u8>) -> Prompt {
    Prompt::default().with_media(mime_type, audio).with_text(
        "You are 'Sahayak', an agriculture expert. Listen to this farmer's voice message and \
         answer it. Keep the answer short, practical, and helpful for a farmer. Reply in the \
         language the farmer spoke (Hindi in Devanagari script, otherwise simple English).",
    )
}

pub fn weather_tip(conditions: &CurrentConditions) -> Prompt {
    Prompt::text(format!(
        r#"
Current Weather for a farm:
Temperature: {}°C
Humidity: {}%
Wind: {} km/h
Condition Code: {} (WMO code)

Give a 1-sentence actionable farming tip based strictly on this weather (e.g., irrigation advice, pest warning).
Keep it short and professional.
"#,
        conditions.temperature, conditions.humidity, conditions.wind_speed, conditions.weather_code
    ))
}
