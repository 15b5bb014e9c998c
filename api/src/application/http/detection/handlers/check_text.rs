use allerscan_core::domain::detection::{
    entities::DetectionReport, ports::DetectionService, value_objects::CheckTextInput,
};
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    detection::validators::{CheckTextRequest, parse_allergy_ids},
    server::{
        api_entities::{
            api_error::{ApiError, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectionResponse {
    pub data: DetectionReport,
    /// `SAFE` or `NOT SAFE - contains ...`
    pub summary: String,
}

impl From<DetectionReport> for DetectionResponse {
    fn from(report: DetectionReport) -> Self {
        Self {
            summary: report.summary(),
            data: report,
        }
    }
}

#[utoipa::path(
    post,
    path = "/text",
    tag = "detection",
    summary = "Check ingredient text",
    description = "Matches free ingredient text, for example a corrected label transcription, against the selected allergies.",
    responses(
        (status = 200, body = DetectionResponse),
        (status = 400, description = "Unknown allergy identifier")
    ),
    request_body = CheckTextRequest
)]
pub async fn check_text(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CheckTextRequest>,
) -> Result<Response<DetectionResponse>, ApiError> {
    let report = state
        .service
        .check_text(CheckTextInput {
            text: payload.text,
            selected_allergies: parse_allergy_ids(payload.allergies),
        })
        .map_err(ApiError::from)?;

    Ok(Response::OK(report.into()))
}
