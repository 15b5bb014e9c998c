use allerscan_core::domain::detection::{
    ports::DetectionService,
    value_objects::{ScanLabelInput, SelectedAllergies},
};
use axum::extract::{Multipart, State};

use crate::application::http::{
    detection::{handlers::check_text::DetectionResponse, validators::parse_allergy_ids},
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[utoipa::path(
    post,
    path = "/label",
    tag = "detection",
    summary = "Scan a label photo",
    description = "Extracts the text of a photographed ingredient label and matches it against the selected allergies. Multipart fields: `image` (file) and `allergies` (repeated, or comma separated).",
    responses(
        (status = 200, body = DetectionResponse),
        (status = 400, description = "Missing image or unknown allergy identifier"),
        (status = 503, description = "Label scanning is not configured")
    ),
)]
pub async fn scan_label(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response<DetectionResponse>, ApiError> {
    let mut image_data: Option<Vec<u8>> = None;
    let mut selected_allergies = SelectedAllergies::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read image: {}", e)))?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(ApiError::BadRequest(format!(
                        "Image too large. Max size is {} bytes",
                        MAX_IMAGE_SIZE
                    )));
                }

                image_data = Some(data.to_vec());
            }
            "allergies" => {
                let value = field.text().await.map_err(|e| {
                    ApiError::BadRequest(format!("Failed to read allergies: {}", e))
                })?;

                selected_allergies.extend(parse_allergy_ids([value]));
            }
            _ => {}
        }
    }

    let image_data =
        image_data.ok_or_else(|| ApiError::BadRequest("Missing image field".to_string()))?;

    let report = state
        .service
        .scan_label(ScanLabelInput {
            image_data,
            selected_allergies,
        })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(report.into()))
}
