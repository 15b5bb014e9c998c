use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Taxonomy or catalog source is missing, malformed or holds an invalid entry.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("unknown allergy identifier: {0}")]
    UnknownAllergy(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("text extraction is not configured")]
    OcrUnavailable,

    #[error("external service error: {0}")]
    ExternalServiceError(String),
}
