use super::handlers::{
    get_allergies::{__path_get_allergies, get_allergies},
    get_taxonomy::{__path_get_taxonomy, get_taxonomy},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_allergies, get_taxonomy))]
pub struct AllergyApiDoc;

pub fn allergy_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/allergies", state.args.server.root_path),
            get(get_allergies),
        )
        .route(
            &format!("{}/allergies/taxonomy", state.args.server.root_path),
            get(get_taxonomy),
        )
}
