use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_openai::{Client, config::OpenAIConfig, types as openai_types};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Configured model value that triggers model discovery at startup.
pub const AUTO_MODEL: &str = "auto";

/// Preferred models, fastest first.
pub const MODEL_PRIORITY: &[&str] = &[
    "gemini-2.5-flash",
    "gemini-1.5-flash",
    "gemini-1.5-flash-latest",
    "gemini-1.5-flash-001",
    "gemini-pro",
    "gemini-1.5-pro",
];

/// Used when discovery fails outright.
pub const FALLBACK_MODEL: &str = "gemini-pro";

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends the prompt as one user turn and returns the raw text of the first choice.
    async fn generate_content(&self, prompt: &Prompt) -> Result<String>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url.trim_end_matches('/'));
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
            temperature: config.temperature,
        }
    }

    /// Like [`OpenAiClient::new`], but resolves the `auto` model against the
    /// models the account can actually use.
    pub async fn connect(config: LlmConfig) -> Self {
        let mut client = Self::new(config);

        if client.model == AUTO_MODEL {
            client.model = match client.available_models().await {
                Ok(models) if !models.is_empty() => {
                    debug!("Found models: {:?}", models);
                    select_model(&models)
                }
                Ok(_) => {
                    warn!("Model list is empty, using {}", FALLBACK_MODEL);
                    FALLBACK_MODEL.to_string()
                }
                Err(e) => {
                    warn!("Could not auto-detect models: {}", e);
                    FALLBACK_MODEL.to_string()
                }
            };
        }

        info!("Selected model: {}", client.model);
        client
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn available_models(&self) -> Result<Vec<String>> {
        let response = self.client.models().list().await?;
        Ok(response
            .data
            .into_iter()
            .map(|model| strip_model_prefix(&model.id).to_string())
            .collect())
    }

    fn build_request(&self, prompt: &Prompt) -> Result<openai_types::CreateChatCompletionRequest> {
        let content = match prompt.parts.as_slice() {
            [Part::Text(text)] => {
                openai_types::ChatCompletionRequestUserMessageContent::Text(text.clone())
            }
            parts => openai_types::ChatCompletionRequestUserMessageContent::Array(
                parts.iter().map(Part::to_openai_part).collect(),
            ),
        };

        let message: openai_types::ChatCompletionRequestMessage =
            openai_types::ChatCompletionRequestUserMessageArgs::default()
                .content(content)
                .build()
                .map_err(|e| Error::llm(format!("Failed to build user message: {}", e)))?
                .into();

        let request = openai_types::CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(vec![message])
            .temperature(self.temperature)
            .build()?;

        Ok(request)
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn generate_content(&self, prompt: &Prompt) -> Result<String> {
        debug!(
            "Generating content with {} parts ({} attachments)",
            prompt.parts.len(),
            prompt.media_count()
        );

        let request = self.build_request(prompt)?;
        let response = self.client.chat().create(request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::llm("Model returned no content"))
    }
}

/// Picks the first model of [`MODEL_PRIORITY`] that is available, falling
/// back to the first listed model.
pub fn select_model(available: &[String]) -> String {
    MODEL_PRIORITY
        .iter()
        .find(|preferred| available.iter().any(|m| strip_model_prefix(m) == **preferred))
        .map(|preferred| preferred.to_string())
        .or_else(|| {
            available
                .first()
                .map(|m| strip_model_prefix(m).to_string())
        })
        .unwrap_or_else(|| FALLBACK_MODEL.to_string())
}

fn strip_model_prefix(id: &str) -> &str {
    id.strip_prefix("models/").unwrap_or(id)
}
