use std::{collections::BTreeSet, future::Future};

use crate::domain::{
    common::entities::app_errors::CoreError,
    detection::{
        entities::DetectionReport,
        value_objects::{CheckProductInput, CheckTextInput, DetectAllergensInput, ScanLabelInput},
    },
};

/// Optical character recognition collaborator.
///
/// Returns the label text as a single whitespace-joined string. Timeouts and
/// cancellation belong to the implementation, not to the detection engine.
#[cfg_attr(test, mockall::automock)]
pub trait TextExtractor: Send + Sync {
    fn extract_text(
        &self,
        image_data: Vec<u8>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DetectionService: Send + Sync {
    /// Fails with [`CoreError::UnknownAllergy`] when a selected identifier is
    /// not part of the taxonomy; nothing is matched in that case.
    fn detect_allergens(
        &self,
        input: DetectAllergensInput,
    ) -> Result<BTreeSet<String>, CoreError>;

    fn check_text(&self, input: CheckTextInput) -> Result<DetectionReport, CoreError>;

    /// `Ok(None)` when no product name contains the query.
    fn check_product(
        &self,
        input: CheckProductInput,
    ) -> Result<Option<DetectionReport>, CoreError>;

    fn scan_label(
        &self,
        input: ScanLabelInput,
    ) -> impl Future<Output = Result<DetectionReport, CoreError>> + Send;
}
