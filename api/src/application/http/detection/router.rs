use super::handlers::{
    check_product::{__path_check_product, check_product},
    check_text::{__path_check_text, check_text},
    scan_label::{__path_scan_label, scan_label},
};
use crate::application::http::server::app_state::AppState;

use axum::{Router, extract::DefaultBodyLimit, routing::post};
use utoipa::OpenApi;

use super::handlers::scan_label::MAX_IMAGE_SIZE;

#[derive(OpenApi)]
#[openapi(paths(check_text, check_product, scan_label))]
pub struct DetectionApiDoc;

pub fn detection_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/detection/text", state.args.server.root_path),
            post(check_text),
        )
        .route(
            &format!("{}/detection/product", state.args.server.root_path),
            post(check_product),
        )
        .route(
            &format!("{}/detection/label", state.args.server.root_path),
            // Leave room for the multipart framing around the image.
            post(scan_label).layer(DefaultBodyLimit::max(MAX_IMAGE_SIZE + 64 * 1024)),
        )
}
