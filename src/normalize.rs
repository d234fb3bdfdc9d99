//! Post-processing of raw model text.

use crate::{Error, Result};
use serde_json::{Map, Value, json};

/// Removes markdown code-fence markers (```` ```json ```` and ```` ``` ````)
/// anywhere in the text and trims the result.
pub fn strip_code_fence(raw: &str) -> String {
    raw.replace("```json", "").replace("```", "").trim().to_string()
}

/// Structured mode: the model was asked for JSON, possibly fenced.
pub fn parse_structured(raw: &str) -> Result<Value> {
    let cleaned = strip_code_fence(raw);
    Ok(serde_json::from_str(&cleaned)?)
}

/// Free-text mode: trims the answer and wraps it under `key`.
pub fn wrap_text(key: &str, raw: &str) -> Result<Value> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(Error::llm("Model returned an empty answer"));
    }

    let mut map = Map::new();
    map.insert(key.to_string(), Value::String(text.to_string()));
    Ok(Value::Object(map))
}

pub fn error_payload(message: impl std::fmt::Display) -> Value {
    json!({ "error": message.to_string() })
}
