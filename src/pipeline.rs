//! Build → invoke → normalize, and the single place failures become JSON.

use crate::{
    Error, Result,
    llm::{LlmClient, Prompt},
    normalize,
};
use serde_json::Value;
use tracing::{debug, warn};

/// Invokes the model and parses its answer as JSON.
pub async fn structured(llm: &dyn LlmClient, prompt: &Prompt) -> Result<Value> {
    let raw = llm.generate_content(prompt).await?;
    debug!("Structured answer: {} bytes", raw.len());
    normalize::parse_structured(&raw)
}

/// Invokes the model and wraps its trimmed answer under `key`.
pub async fn free_text(llm: &dyn LlmClient, prompt: &Prompt, key: &str) -> Result<Value> {
    let raw = llm.generate_content(prompt).await?;
    debug!("Free-text answer for '{}': {} bytes", key, raw.len());
    normalize::wrap_text(key, &raw)
}

/// Turns a pipeline result into a response body, `{"error": ...}` on failure.
pub fn into_payload(result: Result<Value>) -> Value {
    into_payload_with(result, |e| normalize::error_payload(e))
}

/// Like [`into_payload`] with an endpoint-specific failure body.
pub fn into_payload_with<F>(result: Result<Value>, on_error: F) -> Value
where
    F: FnOnce(&Error) -> Value,
{
    match result {
        Ok(value) => value,
        Err(e) => {
            warn!("Request failed: {}", e);
            on_error(&e)
        }
    }
}
