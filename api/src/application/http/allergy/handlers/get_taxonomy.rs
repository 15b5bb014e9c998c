use allerscan_core::domain::allergen::{entities::AllergyDefinition, ports::AllergenService};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetTaxonomyResponse {
    pub data: Vec<AllergyDefinition>,
}

#[utoipa::path(
    get,
    path = "/taxonomy",
    tag = "allergy",
    summary = "Get the allergen taxonomy",
    description = "Returns every allergy definition with its classification and matching terms.",
    responses(
        (status = 200, body = GetTaxonomyResponse)
    ),
)]
pub async fn get_taxonomy(
    State(state): State<AppState>,
) -> Result<Response<GetTaxonomyResponse>, ApiError> {
    Ok(Response::OK(GetTaxonomyResponse {
        data: state.service.list_allergies(),
    }))
}
