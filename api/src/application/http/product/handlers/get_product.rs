use allerscan_core::domain::product::{entities::ProductRecord, ports::ProductService};
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    product::validators::GetProductParams,
    server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

pub const PRODUCT_NOT_FOUND: &str = "Product not found in database.";

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetProductResponse {
    pub data: ProductRecord,
}

#[utoipa::path(
    get,
    path = "",
    tag = "product",
    summary = "Find a product",
    description = "Returns the first catalog product whose name contains the query, ignoring case. An empty query returns the first product.",
    params(GetProductParams),
    responses(
        (status = 200, body = GetProductResponse),
        (status = 404, description = "No product name contains the query")
    ),
)]
pub async fn get_product(
    Query(params): Query<GetProductParams>,
    State(state): State<AppState>,
) -> Result<Response<GetProductResponse>, ApiError> {
    let product = state
        .service
        .find_product(&params.query)
        .ok_or_else(|| ApiError::NotFound(PRODUCT_NOT_FOUND.to_string()))?;

    Ok(Response::OK(GetProductResponse { data: product }))
}
