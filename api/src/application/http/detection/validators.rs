use allerscan_core::domain::detection::value_objects::SelectedAllergies;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CheckTextRequest {
    #[validate(length(
        max = 20000,
        message = "text must be at most 20000 characters"
    ))]
    pub text: String,
    /// Allergy identifiers to look for. Entries may also be comma separated.
    #[serde(default)]
    pub allergies: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct CheckProductRequest {
    #[validate(length(max = 200, message = "query must be at most 200 characters"))]
    pub query: String,
    #[serde(default)]
    pub allergies: Vec<String>,
}

/// Normalizes allergy identifiers from any request shape: each value is split
/// on commas, trimmed, and blank identifiers are dropped.
pub fn parse_allergy_ids<I, S>(values: I) -> SelectedAllergies
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .flat_map(|value| {
            value
                .as_ref()
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}
