use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::attendance::AttendanceInput;
use super::catalog::{rules_catalog, rules_table};
use super::error::EligibilityError;
use super::marks::MarksInput;
use super::tier::Tier;
use super::EligibilityEngine;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceCheckRequest {
    pub tier: String,
    pub attended_classes: i64,
    pub total_classes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarksCheckRequest {
    pub tier: String,
    pub ce: i64,
    #[serde(default)]
    pub faculty: i64,
    pub ese: i64,
}

/// Router builder exposing the rule tables and both evaluators.
pub fn eligibility_router(engine: Arc<EligibilityEngine>) -> Router {
    Router::new()
        .route("/api/v1/tiers", get(catalog_handler))
        .route("/api/v1/tiers/:tier", get(tier_handler))
        .route("/api/v1/attendance/check", post(attendance_handler))
        .route("/api/v1/marks/check", post(marks_handler))
        .with_state(engine)
}

pub(crate) async fn catalog_handler() -> Response {
    (StatusCode::OK, axum::Json(rules_catalog())).into_response()
}

pub(crate) async fn tier_handler(Path(tier): Path<String>) -> Response {
    match tier.parse::<Tier>() {
        Ok(tier) => (StatusCode::OK, axum::Json(rules_table(tier))).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn attendance_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    axum::Json(request): axum::Json<AttendanceCheckRequest>,
) -> Response {
    let input = AttendanceInput::new(request.attended_classes, request.total_classes);
    match engine.check_attendance(&request.tier, &input) {
        Ok(verdict) => (StatusCode::OK, axum::Json(verdict)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn marks_handler(
    State(engine): State<Arc<EligibilityEngine>>,
    axum::Json(request): axum::Json<MarksCheckRequest>,
) -> Response {
    let input = MarksInput::new(request.ce, request.faculty, request.ese);
    match engine.check_marks(&request.tier, &input) {
        Ok(verdict) => (StatusCode::OK, axum::Json(verdict)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: EligibilityError) -> Response {
    match &error {
        EligibilityError::UnknownTier(_) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        EligibilityError::Validation(errors) => {
            let payload = json!({
                "error": error.to_string(),
                "issues": errors.issues,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}
