use allerscan_core::domain::detection::{ports::DetectionService, value_objects::CheckProductInput};
use axum::extract::State;

use crate::application::http::{
    detection::{
        handlers::check_text::DetectionResponse,
        validators::{CheckProductRequest, parse_allergy_ids},
    },
    product::handlers::get_product::PRODUCT_NOT_FOUND,
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/product",
    tag = "detection",
    summary = "Check a catalog product",
    description = "Looks up the first product whose name contains the query and matches its ingredient list against the selected allergies.",
    responses(
        (status = 200, body = DetectionResponse),
        (status = 400, description = "Unknown allergy identifier"),
        (status = 404, description = "No product name contains the query")
    ),
    request_body = CheckProductRequest
)]
pub async fn check_product(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CheckProductRequest>,
) -> Result<Response<DetectionResponse>, ApiError> {
    let report = state
        .service
        .check_product(CheckProductInput {
            query: payload.query,
            selected_allergies: parse_allergy_ids(payload.allergies),
        })
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

    Ok(Response::OK(report.into()))
}
