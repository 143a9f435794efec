use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::rules::{
    eligibility_router, AttendanceInput, EligibilityEngine, EvaluationConfig, MarksInput,
    MarksMode,
};

pub(super) fn attendance(attended: i64, total: i64) -> AttendanceInput {
    AttendanceInput::new(attended, total)
}

pub(super) fn marks(ce: i64, faculty: i64, ese: i64) -> MarksInput {
    MarksInput::new(ce, faculty, ese)
}

pub(super) fn engine() -> EligibilityEngine {
    EligibilityEngine::new(EvaluationConfig::default())
}

pub(super) fn strict_engine() -> EligibilityEngine {
    EligibilityEngine::new(EvaluationConfig {
        marks_mode: MarksMode::Strict,
        validate_inputs: true,
    })
}

pub(super) fn unchecked_engine() -> EligibilityEngine {
    EligibilityEngine::new(EvaluationConfig {
        marks_mode: MarksMode::Lenient,
        validate_inputs: false,
    })
}

pub(super) fn router() -> axum::Router {
    eligibility_router(Arc::new(engine()))
}

pub(super) fn json_request(uri: &str, payload: Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&payload).expect("serialize payload"),
        ))
        .expect("request builds")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
