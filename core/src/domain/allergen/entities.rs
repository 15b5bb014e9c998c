use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AllergyClassification {
    /// Offered to the user for selection.
    DirectAllergen,
    Intolerance,
    Advisory,
    #[serde(other)]
    Other,
}

impl AllergyClassification {
    pub fn is_selectable(&self) -> bool {
        matches!(self, AllergyClassification::DirectAllergen)
    }
}

impl From<&str> for AllergyClassification {
    fn from(s: &str) -> Self {
        match s {
            "direct_allergen" => AllergyClassification::DirectAllergen,
            "intolerance" => AllergyClassification::Intolerance,
            "advisory" => AllergyClassification::Advisory,
            _ => AllergyClassification::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AllergyDefinition {
    pub id: String,
    pub classification: AllergyClassification,
    /// Case-insensitive substrings, any of which marks this allergy as present.
    pub terms: Vec<String>,
}

impl AllergyDefinition {
    pub fn new(
        id: String,
        classification: AllergyClassification,
        terms: Vec<String>,
    ) -> Result<Self, CoreError> {
        if id.trim().is_empty() {
            return Err(CoreError::Configuration(
                "allergy identifier must not be empty".to_string(),
            ));
        }

        if terms.is_empty() {
            return Err(CoreError::Configuration(format!(
                "allergy '{id}' must declare at least one term"
            )));
        }

        if let Some(position) = terms.iter().position(|term| term.trim().is_empty()) {
            return Err(CoreError::Configuration(format!(
                "allergy '{id}' has an empty term at position {position}"
            )));
        }

        Ok(Self {
            id,
            classification,
            terms,
        })
    }

    pub fn is_selectable(&self) -> bool {
        self.classification.is_selectable()
    }
}

/// The allergen taxonomy in source order, indexed by identifier.
#[derive(Debug, Clone, Default)]
pub struct AllergenTaxonomy {
    definitions: Vec<AllergyDefinition>,
    index: HashMap<String, usize>,
}

impl AllergenTaxonomy {
    pub fn new(definitions: Vec<AllergyDefinition>) -> Result<Self, CoreError> {
        let mut index = HashMap::with_capacity(definitions.len());

        for (position, definition) in definitions.iter().enumerate() {
            if index.insert(definition.id.clone(), position).is_some() {
                return Err(CoreError::Configuration(format!(
                    "allergy '{}' is defined more than once",
                    definition.id
                )));
            }
        }

        Ok(Self { definitions, index })
    }

    pub fn get(&self, allergy_id: &str) -> Option<&AllergyDefinition> {
        self.index
            .get(allergy_id)
            .map(|&position| &self.definitions[position])
    }

    pub fn definitions(&self) -> &[AllergyDefinition] {
        &self.definitions
    }

    pub fn selectable_ids(&self) -> Vec<String> {
        self.definitions
            .iter()
            .filter(|definition| definition.is_selectable())
            .map(|definition| definition.id.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn definition(id: &str, classification: AllergyClassification) -> AllergyDefinition {
        AllergyDefinition::new(id.to_string(), classification, vec![id.to_string()])
            .expect("valid definition")
    }

    #[test]
    fn test_definition_rejects_empty_terms() {
        let err = AllergyDefinition::new(
            "peanut".to_string(),
            AllergyClassification::DirectAllergen,
            vec![],
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::Configuration(_)));
    }

    #[test]
    fn test_definition_rejects_blank_term() {
        let err = AllergyDefinition::new(
            "peanut".to_string(),
            AllergyClassification::DirectAllergen,
            vec!["peanut".to_string(), "  ".to_string()],
        )
        .unwrap_err();

        assert_eq!(
            err,
            CoreError::Configuration("allergy 'peanut' has an empty term at position 1".to_string())
        );
    }

    #[test]
    fn test_definition_rejects_blank_identifier() {
        let err = AllergyDefinition::new(
            " ".to_string(),
            AllergyClassification::DirectAllergen,
            vec!["peanut".to_string()],
        )
        .unwrap_err();

        assert!(matches!(err, CoreError::Configuration(_)));
    }

    #[test]
    fn test_taxonomy_rejects_duplicate_identifiers() {
        let result = AllergenTaxonomy::new(vec![
            definition("milk", AllergyClassification::DirectAllergen),
            definition("milk", AllergyClassification::Advisory),
        ]);

        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }

    #[test]
    fn test_selectable_ids_keep_source_order() {
        let taxonomy = AllergenTaxonomy::new(vec![
            definition("soy", AllergyClassification::DirectAllergen),
            definition("gluten", AllergyClassification::Intolerance),
            definition("milk", AllergyClassification::DirectAllergen),
            definition("may_contain", AllergyClassification::Advisory),
        ])
        .unwrap();

        assert_eq!(taxonomy.selectable_ids(), vec!["soy", "milk"]);
        assert_eq!(taxonomy.len(), 4);
        assert_eq!(
            taxonomy.get("gluten").map(|d| d.classification),
            Some(AllergyClassification::Intolerance)
        );
        assert!(taxonomy.get("sesame").is_none());
    }

    #[test]
    fn test_classification_from_str() {
        assert_eq!(
            AllergyClassification::from("direct_allergen"),
            AllergyClassification::DirectAllergen
        );
        assert_eq!(
            AllergyClassification::from("lifestyle"),
            AllergyClassification::Other
        );
        assert!(!AllergyClassification::Other.is_selectable());
    }
}
