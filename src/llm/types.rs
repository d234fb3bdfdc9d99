use async_openai::types::{
    ChatCompletionRequestMessageContentPartAudio, ChatCompletionRequestMessageContentPartImage,
    ChatCompletionRequestMessageContentPartText, ChatCompletionRequestUserMessageContentPart,
    ImageUrl, InputAudio, InputAudioFormat,
};
use base64::Engine as _;

/// One piece of a prompt: instructional text or a binary attachment.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Text(String),
    Media { mime_type: String, data: Vec<u8> },
}

/// Ordered parts sent to the model as a single user turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Prompt {
    pub parts: Vec<Part>,
}

impl Prompt {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::Text(text.into())],
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::Text(text.into()));
        self
    }

    pub fn with_media(mut self, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        self.parts.push(Part::Media {
            mime_type: mime_type.into(),
            data,
        });
        self
    }

    /// Concatenated text parts, skipping attachments.
    pub fn text_content(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Text(text) => Some(text.as_str()),
                Part::Media { .. } => None,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn media_count(&self) -> usize {
        self.parts
            .iter()
            .filter(|part| matches!(part, Part::Media { .. }))
            .count()
    }
}

impl Part {
    pub fn to_openai_part(&self) -> ChatCompletionRequestUserMessageContentPart {
        match self {
            Part::Text(text) => ChatCompletionRequestUserMessageContentPart::Text(
                ChatCompletionRequestMessageContentPartText { text: text.clone() },
            ),
            Part::Media { mime_type, data } if mime_type.starts_with("audio/") => {
                ChatCompletionRequestUserMessageContentPart::InputAudio(
                    ChatCompletionRequestMessageContentPartAudio {
                        input_audio: InputAudio {
                            data: base64::engine::general_purpose::STANDARD.encode(data),
                            format: audio_format(mime_type),
                        },
                    },
                )
            }
            Part::Media { mime_type, data } => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(data);
                ChatCompletionRequestUserMessageContentPart::ImageUrl(
                    ChatCompletionRequestMessageContentPartImage {
                        image_url: ImageUrl {
                            url: format!("data:{};base64,{}", mime_type, encoded),
                            detail: None,
                        },
                    },
                )
            }
        }
    }
}

fn audio_format(mime_type: &str) -> InputAudioFormat {
    match mime_type {
        "audio/wav" | "audio/x-wav" | "audio/wave" => InputAudioFormat::Wav,
        _ => InputAudioFormat::Mp3,
    }
}
