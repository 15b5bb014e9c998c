use allerscan_core::domain::{allergen::ports::AllergenService, product::ports::ProductService};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    pub allergies: usize,
    pub products: usize,
    pub label_scanning: bool,
}

#[utoipa::path(
    get,
    path = "",
    tag = "health",
    summary = "Service health",
    description = "Reports the size of the loaded taxonomy and catalog and whether label scanning is available.",
    responses(
        (status = 200, body = HealthResponse)
    ),
)]
pub async fn get_health(
    State(state): State<AppState>,
) -> Result<Response<HealthResponse>, ApiError> {
    Ok(Response::OK(HealthResponse {
        status: "ok".to_string(),
        allergies: state.service.list_allergies().len(),
        products: state.service.count_products(),
        label_scanning: state.service.label_scanning_enabled(),
    }))
}
