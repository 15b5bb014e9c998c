use allerscan_core::domain::allergen::ports::AllergenService;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::{
    api_entities::{api_error::ApiError, response::Response},
    app_state::AppState,
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetAllergiesResponse {
    pub data: Vec<String>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "allergy",
    summary = "List selectable allergies",
    description = "Returns the identifiers of every direct allergen, in taxonomy order. These are the values accepted in `allergies` by the detection endpoints.",
    responses(
        (status = 200, body = GetAllergiesResponse)
    ),
)]
pub async fn get_allergies(
    State(state): State<AppState>,
) -> Result<Response<GetAllergiesResponse>, ApiError> {
    let allergies = state.service.list_selectable_allergies();

    Ok(Response::OK(GetAllergiesResponse { data: allergies }))
}
