use base64::{Engine as _, engine::general_purpose};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{common::entities::app_errors::CoreError, detection::ports::TextExtractor};

/// Text extraction through the Gemini vision model.
#[derive(Debug, Clone)]
pub struct GeminiTextExtractor {
    api_key: String,
    model_name: String,
    language: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: String,
}

/// Shape requested from the model through `response_schema`.
#[derive(Debug, Deserialize)]
struct TranscribedLines {
    lines: Vec<String>,
}

impl GeminiTextExtractor {
    pub fn new(api_key: String, model_name: String, language: String) -> Self {
        Self {
            api_key,
            model_name,
            language,
            client: Client::new(),
        }
    }

    fn transcription_prompt(&self) -> String {
        format!(
            "Transcribe every line of printed text visible in this product label, \
             in reading order, exactly as written. The label is in language '{}'. \
             Do not translate, summarise or correct the text.",
            self.language
        )
    }

    fn transcription_endpoint(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model_name
        )
    }

    async fn request_transcription(&self, request: GeminiRequest) -> Result<String, CoreError> {
        let response = self
            .client
            .post(self.transcription_endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    model = %self.model_name,
                    "label transcription request failed: {}",
                    e
                );
                CoreError::ExternalServiceError(format!("label transcription request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                model = %self.model_name,
                %status,
                "label transcription rejected: {}",
                error_text
            );
            return Err(CoreError::ExternalServiceError(format!(
                "label transcription rejected with {status}: {error_text}"
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            tracing::error!("label transcription response is unreadable: {}", e);
            CoreError::ExternalServiceError(format!(
                "label transcription response is unreadable: {e}"
            ))
        })?;

        first_candidate_text(gemini_response)
    }
}

impl TextExtractor for GeminiTextExtractor {
    async fn extract_text(&self, image_data: Vec<u8>) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: self.transcription_prompt(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: detect_mime_type(&image_data).to_string(),
                            data: general_purpose::STANDARD.encode(&image_data),
                        },
                    },
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: transcription_schema(),
            },
        };

        let raw_response = self.request_transcription(request).await?;
        join_transcribed_lines(&raw_response)
    }
}

fn transcription_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "lines": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["lines"]
    })
}

fn first_candidate_text(response: GeminiResponse) -> Result<String, CoreError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or_else(|| {
            CoreError::ExternalServiceError("label transcription returned no text".to_string())
        })
}

/// Joins the transcribed lines with single spaces, skipping blank ones.
fn join_transcribed_lines(raw_response: &str) -> Result<String, CoreError> {
    let transcribed: TranscribedLines = serde_json::from_str(raw_response).map_err(|e| {
        tracing::error!("label transcription has an unexpected shape: {}", e);
        CoreError::ExternalServiceError(format!(
            "label transcription has an unexpected shape: {e}"
        ))
    })?;

    Ok(transcribed
        .lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" "))
}

fn detect_mime_type(image_data: &[u8]) -> &'static str {
    match image_data {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        [b'G', b'I', b'F', ..] => "image/gif",
        _ => "image/jpeg",
    }
}
