use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::domain::{
    allergen::{entities::AllergyDefinition, ports::AllergenRepository},
    common::{entities::app_errors::CoreError, services::Service},
    detection::{
        entities::{DetectionReport, InputType},
        ports::{DetectionService, TextExtractor},
        value_objects::{
            CheckProductInput, CheckTextInput, DetectAllergensInput, ScanLabelInput,
            SelectedAllergies,
        },
    },
    product::ports::ProductRepository,
};

impl<A, P, T> Service<A, P, T>
where
    A: AllergenRepository,
    P: ProductRepository,
    T: TextExtractor,
{
    /// Resolves every selected identifier, rejecting the request on the first
    /// unknown one.
    fn resolve_allergies(
        &self,
        selected_allergies: &SelectedAllergies,
    ) -> Result<Vec<AllergyDefinition>, CoreError> {
        selected_allergies
            .iter()
            .map(|allergy_id| {
                self.allergen_repository
                    .get_allergy(allergy_id)
                    .ok_or_else(|| {
                        warn!(allergy_id = %allergy_id, "rejected unknown allergy identifier");
                        CoreError::UnknownAllergy(allergy_id.clone())
                    })
            })
            .collect()
    }

    fn match_ingredients(
        &self,
        ingredient_texts: &[String],
        selected_allergies: &SelectedAllergies,
    ) -> Result<BTreeSet<String>, CoreError> {
        let allergies = self.resolve_allergies(selected_allergies)?;
        let detected = self.term_matcher.detect(ingredient_texts, &allergies);

        debug!(
            texts = ingredient_texts.len(),
            selected = allergies.len(),
            detected = detected.len(),
            mode = %self.term_matcher.mode(),
            "matched ingredients"
        );

        Ok(detected)
    }
}

impl<A, P, T> DetectionService for Service<A, P, T>
where
    A: AllergenRepository,
    P: ProductRepository,
    T: TextExtractor,
{
    fn detect_allergens(
        &self,
        input: DetectAllergensInput,
    ) -> Result<BTreeSet<String>, CoreError> {
        self.match_ingredients(&input.ingredient_texts, &input.selected_allergies)
    }

    fn check_text(&self, input: CheckTextInput) -> Result<DetectionReport, CoreError> {
        let ingredients = vec![input.text];
        let detected = self.match_ingredients(&ingredients, &input.selected_allergies)?;

        Ok(DetectionReport::new(
            InputType::Text,
            None,
            ingredients,
            detected,
        ))
    }

    fn check_product(
        &self,
        input: CheckProductInput,
    ) -> Result<Option<DetectionReport>, CoreError> {
        // Validate the selection before the lookup so an unknown identifier is
        // reported even when the product does not exist.
        let allergies = self.resolve_allergies(&input.selected_allergies)?;

        let Some(product) = self.product_repository.find_first_by_name(&input.query) else {
            debug!(query = %input.query, "product not found");
            return Ok(None);
        };

        let detected = self.term_matcher.detect(&product.ingredients, &allergies);
        debug!(
            product = %product.name,
            detected = detected.len(),
            "checked product"
        );

        let ingredients = product.ingredients.clone();
        Ok(Some(DetectionReport::new(
            InputType::Product,
            Some(product),
            ingredients,
            detected,
        )))
    }

    async fn scan_label(&self, input: ScanLabelInput) -> Result<DetectionReport, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::InvalidInput("image must not be empty".to_string()));
        }

        let allergies = self.resolve_allergies(&input.selected_allergies)?;

        let text = self.text_extractor.extract_text(input.image_data).await?;
        debug!(characters = text.len(), "extracted label text");

        let ingredients = vec![text];
        let detected = self.term_matcher.detect(&ingredients, &allergies);

        Ok(DetectionReport::new(
            InputType::Label,
            None,
            ingredients,
            detected,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        allergen::{entities::AllergyClassification, ports::MockAllergenRepository},
        detection::{
            entities::Verdict,
            matcher::{MatchMode, TermMatcher},
            ports::MockTextExtractor,
        },
        product::{entities::ProductRecord, ports::MockProductRepository},
    };

    fn taxonomy_repository() -> MockAllergenRepository {
        let mut repository = MockAllergenRepository::new();
        repository
            .expect_get_allergy()
            .returning(|allergy_id| match allergy_id {
                "peanut" => Some(AllergyDefinition {
                    id: "peanut".to_string(),
                    classification: AllergyClassification::DirectAllergen,
                    terms: vec!["peanut".to_string(), "groundnut".to_string()],
                }),
                "egg_allergy" => Some(AllergyDefinition {
                    id: "egg_allergy".to_string(),
                    classification: AllergyClassification::DirectAllergen,
                    terms: vec!["egg".to_string()],
                }),
                "milk" => Some(AllergyDefinition {
                    id: "milk".to_string(),
                    classification: AllergyClassification::DirectAllergen,
                    terms: vec!["milk".to_string(), "whey".to_string()],
                }),
                _ => None,
            });
        repository
    }

    fn trail_mix_repository() -> MockProductRepository {
        let mut repository = MockProductRepository::new();
        repository.expect_find_first_by_name().returning(|query| {
            "trail mix".contains(&query.to_lowercase()).then(|| ProductRecord {
                name: "Trail Mix".to_string(),
                ingredients: vec![
                    "oats".to_string(),
                    "peanut butter".to_string(),
                    "raisins".to_string(),
                ],
            })
        });
        repository
    }

    fn service(
        product_repository: MockProductRepository,
        text_extractor: MockTextExtractor,
    ) -> Service<MockAllergenRepository, MockProductRepository, MockTextExtractor> {
        Service::new(
            taxonomy_repository(),
            product_repository,
            text_extractor,
            TermMatcher::default(),
        )
    }

    fn selected(ids: &[&str]) -> SelectedAllergies {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn texts(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_detect_allergens_trail_mix_ingredients() {
        let service = service(MockProductRepository::new(), MockTextExtractor::new());

        let detected = service
            .detect_allergens(DetectAllergensInput {
                ingredient_texts: texts(&["oats", "peanut butter", "raisins"]),
                selected_allergies: selected(&["peanut"]),
            })
            .unwrap();

        assert_eq!(detected, selected(&["peanut"]));
    }

    #[test]
    fn test_detect_allergens_without_terms_is_empty() {
        let service = service(MockProductRepository::new(), MockTextExtractor::new());

        let detected = service
            .detect_allergens(DetectAllergensInput {
                ingredient_texts: texts(&["oats", "raisins"]),
                selected_allergies: selected(&["peanut"]),
            })
            .unwrap();

        assert!(detected.is_empty());
    }

    #[test]
    fn test_detect_allergens_rejects_unknown_identifier() {
        let service = service(MockProductRepository::new(), MockTextExtractor::new());

        let err = service
            .detect_allergens(DetectAllergensInput {
                ingredient_texts: texts(&["peanut butter"]),
                selected_allergies: selected(&["peanut", "shellfish"]),
            })
            .unwrap_err();

        assert_eq!(err, CoreError::UnknownAllergy("shellfish".to_string()));
    }

    #[test]
    fn test_detect_allergens_with_empty_selection_is_safe() {
        let service = service(MockProductRepository::new(), MockTextExtractor::new());

        let detected = service
            .detect_allergens(DetectAllergensInput {
                ingredient_texts: texts(&["peanut butter"]),
                selected_allergies: SelectedAllergies::new(),
            })
            .unwrap();

        assert!(detected.is_empty());
    }

    #[test]
    fn test_detect_allergens_substring_inside_word() {
        let service = service(MockProductRepository::new(), MockTextExtractor::new());

        let detected = service
            .detect_allergens(DetectAllergensInput {
                ingredient_texts: texts(&["eggplant extract"]),
                selected_allergies: selected(&["egg_allergy"]),
            })
            .unwrap();

        assert_eq!(detected, selected(&["egg_allergy"]));
    }

    #[test]
    fn test_whole_word_mode_is_honoured() {
        let service = Service::new(
            taxonomy_repository(),
            MockProductRepository::new(),
            MockTextExtractor::new(),
            TermMatcher::new(MatchMode::WholeWord),
        );

        let detected = service
            .detect_allergens(DetectAllergensInput {
                ingredient_texts: texts(&["eggplant extract"]),
                selected_allergies: selected(&["egg_allergy"]),
            })
            .unwrap();

        assert!(detected.is_empty());
    }

    #[test]
    fn test_check_text_builds_single_source_report() {
        let service = service(MockProductRepository::new(), MockTextExtractor::new());

        let report = service
            .check_text(CheckTextInput {
                text: "Ingredients: sugar, WHEY, cocoa".to_string(),
                selected_allergies: selected(&["milk", "peanut"]),
            })
            .unwrap();

        assert_eq!(report.input_type, InputType::Text);
        assert_eq!(report.ingredients, vec!["Ingredients: sugar, WHEY, cocoa"]);
        assert_eq!(report.detected_allergies, vec!["milk"]);
        assert_eq!(report.verdict, Verdict::Unsafe);
    }

    #[test]
    fn test_check_product_found() {
        let service = service(trail_mix_repository(), MockTextExtractor::new());

        let report = service
            .check_product(CheckProductInput {
                query: "trail".to_string(),
                selected_allergies: selected(&["peanut"]),
            })
            .unwrap()
            .expect("product exists");

        assert_eq!(report.input_type, InputType::Product);
        assert_eq!(report.product.as_ref().unwrap().name, "Trail Mix");
        assert_eq!(report.ingredients, vec!["oats", "peanut butter", "raisins"]);
        assert_eq!(report.summary(), "NOT SAFE - contains peanut");
    }

    #[test]
    fn test_check_product_not_found_is_not_an_error() {
        let service = service(trail_mix_repository(), MockTextExtractor::new());

        let report = service
            .check_product(CheckProductInput {
                query: "granola".to_string(),
                selected_allergies: selected(&["peanut"]),
            })
            .unwrap();

        assert!(report.is_none());
    }

    #[test]
    fn test_check_product_validates_selection_first() {
        let mut product_repository = MockProductRepository::new();
        product_repository.expect_find_first_by_name().never();
        let service = service(product_repository, MockTextExtractor::new());

        let err = service
            .check_product(CheckProductInput {
                query: "trail".to_string(),
                selected_allergies: selected(&["soy"]),
            })
            .unwrap_err();

        assert_eq!(err, CoreError::UnknownAllergy("soy".to_string()));
    }

    #[tokio::test]
    async fn test_scan_label_matches_extracted_text() {
        let mut text_extractor = MockTextExtractor::new();
        text_extractor
            .expect_extract_text()
            .withf(|image_data| image_data == &vec![0xFF, 0xD8, 0xFF])
            .returning(|_| Box::pin(async { Ok("Contains: Groundnuts Milk".to_string()) }));
        let service = service(MockProductRepository::new(), text_extractor);

        let report = service
            .scan_label(ScanLabelInput {
                image_data: vec![0xFF, 0xD8, 0xFF],
                selected_allergies: selected(&["peanut", "milk", "egg_allergy"]),
            })
            .await
            .unwrap();

        assert_eq!(report.input_type, InputType::Label);
        assert_eq!(report.ingredients, vec!["Contains: Groundnuts Milk"]);
        assert_eq!(report.detected_allergies, vec!["milk", "peanut"]);
    }

    #[tokio::test]
    async fn test_scan_label_propagates_extractor_failure() {
        let mut text_extractor = MockTextExtractor::new();
        text_extractor
            .expect_extract_text()
            .returning(|_| Box::pin(async { Err(CoreError::OcrUnavailable) }));
        let service = service(MockProductRepository::new(), text_extractor);

        let err = service
            .scan_label(ScanLabelInput {
                image_data: vec![1, 2, 3],
                selected_allergies: selected(&["peanut"]),
            })
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::OcrUnavailable);
    }

    #[tokio::test]
    async fn test_scan_label_rejects_empty_image() {
        let mut text_extractor = MockTextExtractor::new();
        text_extractor.expect_extract_text().never();
        let service = service(MockProductRepository::new(), text_extractor);

        let err = service
            .scan_label(ScanLabelInput {
                image_data: vec![],
                selected_allergies: selected(&["peanut"]),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidInput(_)));
    }
}
