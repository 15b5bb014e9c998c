use std::path::PathBuf;

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp};

use crate::domain::detection::matcher::MatchMode;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct AllerscanConfig {
    pub data: DataConfig,
    pub matching: MatchingConfig,
    pub ocr: OcrConfig,
}

/// Locations of the taxonomy and catalog sources, read once at startup.
#[derive(Clone, Debug)]
pub struct DataConfig {
    pub allergens_path: PathBuf,
    pub products_path: PathBuf,
}

#[derive(Clone, Debug, Default)]
pub struct MatchingConfig {
    pub mode: MatchMode,
}

#[derive(Clone, Debug)]
pub struct OcrConfig {
    /// Label scanning is disabled when no key is configured.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub language: String,
}

pub fn generate_timestamp() -> (DateTime<Utc>, Timestamp) {
    let now = Utc::now();
    let seconds = now.timestamp().try_into().unwrap_or(0);
    let timestamp = Timestamp::from_unix(NoContext, seconds, now.timestamp_subsec_nanos());

    (now, timestamp)
}
