use crate::application::http::{
    allergy::router::AllergyApiDoc, detection::router::DetectionApiDoc,
    health::router::HealthApiDoc, product::router::ProductApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Allerscan API"
    ),
    nest(
        (path = "/allergies", api = AllergyApiDoc),
        (path = "/products", api = ProductApiDoc),
        (path = "/detection", api = DetectionApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
