use super::common::*;
use axum::extract::Path;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::rules::router::tier_handler;

#[tokio::test]
async fn attendance_route_returns_verdict() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/attendance/check",
            json!({ "tier": "pg", "attended_classes": 70, "total_classes": 100 }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["percentage"], 70);
    assert_eq!(body["eligible"], false);
    assert_eq!(body["second_internal_eligible"], true);
    assert_eq!(body["tier"], "pg");
}

#[tokio::test]
async fn marks_route_defaults_missing_faculty_to_zero() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/marks/check",
            json!({ "tier": "ug", "ce": 14, "ese": 26 }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["total"], 40);
    assert_eq!(body["passed"], true);
    assert_eq!(body["mode"], "lenient");
}

#[tokio::test]
async fn unknown_tier_maps_to_not_found() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/attendance/check",
            json!({ "tier": "xyz", "attended_classes": 10, "total_classes": 10 }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json_body(response).await;
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("unknown tier 'xyz'"));
}

#[tokio::test]
async fn invalid_marks_map_to_unprocessable_entity() {
    let response = router()
        .oneshot(json_request(
            "/api/v1/marks/check",
            json!({ "tier": "pg", "ce": 31, "faculty": 4, "ese": 40 }),
        ))
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = read_json_body(response).await;
    assert_eq!(body["issues"][0]["field"], "ce");
}

#[tokio::test]
async fn catalog_route_lists_all_tiers() {
    let response = router()
        .oneshot(
            axum::http::Request::get("/api/v1/tiers")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    let tiers: Vec<&str> = body
        .as_array()
        .expect("array payload")
        .iter()
        .filter_map(|view| view["tier"].as_str())
        .collect();
    assert_eq!(tiers, vec!["pg", "ug", "diploma"]);
}

#[tokio::test]
async fn tier_handler_renders_single_table() {
    let response = tier_handler(Path("diploma".to_string())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json_body(response).await;
    assert_eq!(body["label"], "Diploma");
    assert_eq!(body["attendance"][2]["minimum_pct"], 65);
    assert_eq!(body["samples"]["marks"][1]["passed"], false);
}

#[tokio::test]
async fn tier_handler_rejects_unknown_tier() {
    let response = tier_handler(Path("masters".to_string())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
