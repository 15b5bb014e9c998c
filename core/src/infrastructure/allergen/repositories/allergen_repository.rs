use std::{fs, path::Path, sync::Arc};

use tracing::{error, info, warn};

use crate::{
    domain::{
        allergen::{
            entities::{AllergenTaxonomy, AllergyDefinition},
            ports::AllergenRepository,
        },
        common::entities::app_errors::CoreError,
    },
    infrastructure::allergen::mappers::parse_taxonomy,
};

#[derive(Debug, Clone)]
pub struct InMemoryAllergenRepository {
    taxonomy: Arc<AllergenTaxonomy>,
}

impl InMemoryAllergenRepository {
    pub fn new(taxonomy: AllergenTaxonomy) -> Self {
        Self {
            taxonomy: Arc::new(taxonomy),
        }
    }

    /// Reads and validates the taxonomy file. Nothing is kept on failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read allergen taxonomy {}: {}", path.display(), e);
            CoreError::Configuration(format!(
                "failed to read allergen taxonomy {}: {e}",
                path.display()
            ))
        })?;

        let taxonomy = parse_taxonomy(&source)?;
        if taxonomy.is_empty() {
            warn!("Allergen taxonomy {} has no entries", path.display());
        }

        info!(
            allergies = taxonomy.len(),
            selectable = taxonomy.selectable_ids().len(),
            "loaded allergen taxonomy from {}",
            path.display()
        );

        Ok(Self::new(taxonomy))
    }
}

impl AllergenRepository for InMemoryAllergenRepository {
    fn list_allergies(&self) -> Vec<AllergyDefinition> {
        self.taxonomy.definitions().to_vec()
    }

    fn get_allergy(&self, allergy_id: &str) -> Option<AllergyDefinition> {
        self.taxonomy.get(allergy_id).cloned()
    }

    fn list_selectable_ids(&self) -> Vec<String> {
        self.taxonomy.selectable_ids()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "peanut": {{ "type": "direct_allergen", "terms": ["peanut"] }} }}"#
        )
        .unwrap();

        let repository = InMemoryAllergenRepository::load(file.path()).unwrap();

        assert_eq!(repository.list_allergies().len(), 1);
        assert_eq!(
            repository.get_allergy("peanut").unwrap().terms,
            vec!["peanut"]
        );
        assert!(repository.get_allergy("milk").is_none());
    }

    #[test]
    fn test_list_selectable_ids_skips_non_direct_allergens() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "peanut": {{ "type": "direct_allergen", "terms": ["peanut"] }},
                "palm_oil": {{ "type": "advisory", "terms": ["palm"] }},
                "milk": {{ "type": "direct_allergen", "terms": ["milk", "whey"] }}
            }}"#
        )
        .unwrap();

        let repository = InMemoryAllergenRepository::load(file.path()).unwrap();

        assert_eq!(repository.list_selectable_ids(), vec!["peanut", "milk"]);
    }

    #[test]
    fn test_load_missing_file_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();

        let result = InMemoryAllergenRepository::load(dir.path().join("allergens.json"));

        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }
}
