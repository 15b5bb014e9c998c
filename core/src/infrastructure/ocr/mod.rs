pub mod gemini_client;

use crate::domain::{common::entities::app_errors::CoreError, detection::ports::TextExtractor};

pub use gemini_client::GeminiTextExtractor;

/// The configured text extraction backend.
#[derive(Debug, Clone)]
pub enum OcrClient {
    Gemini(GeminiTextExtractor),
    /// No backend configured; label scanning is refused.
    Disabled,
}

impl OcrClient {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, OcrClient::Disabled)
    }
}

impl TextExtractor for OcrClient {
    async fn extract_text(&self, image_data: Vec<u8>) -> Result<String, CoreError> {
        match self {
            OcrClient::Gemini(client) => client.extract_text(image_data).await,
            OcrClient::Disabled => Err(CoreError::OcrUnavailable),
        }
    }
}
