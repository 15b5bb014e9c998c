use super::handlers::get_product::{__path_get_product, get_product};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_product))]
pub struct ProductApiDoc;

pub fn product_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/products", state.args.server.root_path),
        get(get_product),
    )
}
