use serde::Deserialize;

use crate::domain::{
    allergen::entities::{AllergenTaxonomy, AllergyClassification, AllergyDefinition},
    common::entities::app_errors::CoreError,
};

/// One taxonomy entry as written in the source file. Fields are optional so
/// a missing one can be reported by name.
#[derive(Debug, Deserialize)]
pub struct AllergenEntryModel {
    #[serde(alias = "type")]
    pub classification: Option<String>,
    pub terms: Option<Vec<String>>,
}

impl TryFrom<(String, AllergenEntryModel)> for AllergyDefinition {
    type Error = CoreError;

    fn try_from((id, model): (String, AllergenEntryModel)) -> Result<Self, Self::Error> {
        let classification = model.classification.ok_or_else(|| {
            CoreError::Configuration(format!(
                "allergy '{id}' is missing required field 'classification'"
            ))
        })?;

        let terms = model.terms.ok_or_else(|| {
            CoreError::Configuration(format!("allergy '{id}' is missing required field 'terms'"))
        })?;

        AllergyDefinition::new(
            id,
            AllergyClassification::from(classification.as_str()),
            terms,
        )
    }
}

/// Every entry of a taxonomy document in source order, repeated keys included.
#[derive(Debug)]
pub struct TaxonomyDocument(pub Vec<(String, AllergenEntryModel)>);

impl<'de> Deserialize<'de> for TaxonomyDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de;

        struct EntriesVisitor;

        impl<'de> de::Visitor<'de> for EntriesVisitor {
            type Value = TaxonomyDocument;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("an object keyed by allergy identifier")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: de::MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, AllergenEntryModel>()? {
                    entries.push(entry);
                }

                Ok(TaxonomyDocument(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Parses a taxonomy document: a JSON object keyed by allergy identifier.
/// Key order is preserved. Any invalid entry, or an identifier that appears
/// twice, fails the whole document.
pub fn parse_taxonomy(source: &str) -> Result<AllergenTaxonomy, CoreError> {
    let TaxonomyDocument(entries) = serde_json::from_str(source).map_err(|e| {
        CoreError::Configuration(format!("allergen taxonomy is malformed: {e}"))
    })?;

    let definitions = entries
        .into_iter()
        .map(AllergyDefinition::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    AllergenTaxonomy::new(definitions)
}
