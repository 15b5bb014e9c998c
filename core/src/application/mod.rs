use tracing::{info, warn};

use crate::{
    domain::{
        common::{AllerscanConfig, entities::app_errors::CoreError, services::Service},
        detection::matcher::TermMatcher,
    },
    infrastructure::{
        allergen::repositories::InMemoryAllergenRepository,
        ocr::{GeminiTextExtractor, OcrClient},
        product::repositories::InMemoryProductRepository,
    },
};

pub type AllerscanService =
    Service<InMemoryAllergenRepository, InMemoryProductRepository, OcrClient>;

impl AllerscanService {
    pub fn label_scanning_enabled(&self) -> bool {
        self.text_extractor.is_enabled()
    }
}

/// Loads the taxonomy and the catalog and wires the detection service.
///
/// Either both sources load completely or an error is returned and the
/// process must not start serving.
pub fn create_service(config: AllerscanConfig) -> Result<AllerscanService, CoreError> {
    let allergen_repository = InMemoryAllergenRepository::load(&config.data.allergens_path)?;
    let product_repository = InMemoryProductRepository::load(&config.data.products_path)?;

    let text_extractor = match config.ocr.gemini_api_key {
        Some(api_key) if !api_key.is_empty() => {
            info!(model = %config.ocr.gemini_model, "label scanning enabled");
            OcrClient::Gemini(GeminiTextExtractor::new(
                api_key,
                config.ocr.gemini_model,
                config.ocr.language,
            ))
        }
        _ => {
            warn!("no OCR backend configured, label scanning is disabled");
            OcrClient::Disabled
        }
    };

    info!(mode = %config.matching.mode, "term matching configured");

    Ok(Service::new(
        allergen_repository,
        product_repository,
        text_extractor,
        TermMatcher::new(config.matching.mode),
    ))
}
