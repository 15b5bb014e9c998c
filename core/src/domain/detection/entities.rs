use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, product::entities::ProductRecord};

/// Where the ingredient text of a detection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Text extracted from a photographed label.
    Label,
    /// Free text supplied by the caller.
    Text,
    /// Ingredient list of a catalog product.
    Product,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Safe,
    Unsafe,
}

impl Verdict {
    pub fn from_detected(detected: &BTreeSet<String>) -> Self {
        if detected.is_empty() {
            Verdict::Safe
        } else {
            Verdict::Unsafe
        }
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Verdict::Safe)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DetectionReport {
    pub id: Uuid,
    pub input_type: InputType,
    pub product: Option<ProductRecord>,
    pub ingredients: Vec<String>,
    pub detected_allergies: Vec<String>,
    pub verdict: Verdict,
    pub checked_at: DateTime<Utc>,
}

impl DetectionReport {
    pub fn new(
        input_type: InputType,
        product: Option<ProductRecord>,
        ingredients: Vec<String>,
        detected: BTreeSet<String>,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();
        let verdict = Verdict::from_detected(&detected);

        Self {
            id: Uuid::new_v7(timestamp),
            input_type,
            product,
            ingredients,
            detected_allergies: detected.into_iter().collect(),
            verdict,
            checked_at: now,
        }
    }

    /// Human readable verdict, e.g. `NOT SAFE - contains milk, peanut`.
    pub fn summary(&self) -> String {
        match self.verdict {
            Verdict::Safe => "SAFE".to_string(),
            Verdict::Unsafe => format!(
                "NOT SAFE - contains {}",
                self.detected_allergies.join(", ")
            ),
        }
    }
}
