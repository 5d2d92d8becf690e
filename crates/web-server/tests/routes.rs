use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use catalog::SectorCatalog;
use configuration::EngineConfig;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use web_server::{build_router, AppState};

fn app() -> Router {
    let config = EngineConfig {
        seed: Some(7),
        ..EngineConfig::default()
    };
    build_router(Arc::new(AppState::new(SectorCatalog::psx(), config)))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(uri: &str) -> (StatusCode, Value) {
    send(Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post_json(uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(request).await
}

#[tokio::test]
async fn health_is_healthy() {
    let (status, body) = get("/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn sectors_use_defaults_when_params_absent() {
    let (status, body) = get("/api/v1/sectors").await;
    assert_eq!(status, StatusCode::OK);

    let sectors = body["sectors"].as_array().unwrap();
    assert_eq!(sectors.len(), 13);
    // Default ordering is market cap, descending.
    assert_eq!(sectors[0]["id"], "banking-finance");
    assert_eq!(body["market_summary"]["total_market_cap"], 4.74e12);
}

#[tokio::test]
async fn sectors_reject_bad_enum_with_400() {
    let (status, body) = get("/api/v1/sectors?timeframe=1D&sort_by=market_cap&sort_order=up").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("sort_order"));
}

#[tokio::test]
async fn sector_details_for_cement() {
    let (status, body) = get("/api/v1/sectors/cement?timeframe=1M").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sector"]["id"], "cement");
    assert_eq!(body["sector"]["company_count"], 22);
    assert_eq!(body["performance_chart"]["timeframe"], "1M");
    assert_eq!(body["performance_chart"]["data_points"].as_array().unwrap().len(), 30);
    assert_eq!(body["companies"].as_array().unwrap().len(), 20);
}

#[tokio::test]
async fn unknown_sector_is_404() {
    let (status, body) = get("/api/v1/sectors/atlantis").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "sector not found: atlantis");

    let (status, _) = get("/api/v1/sectors/atlantis/companies").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn companies_honour_limit_and_sort() {
    let (status, body) = get("/api/v1/sectors/oil-gas/companies?limit=5&sort_by=pe_ratio").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sector_name"], "Oil & Gas");

    let pe: Vec<f64> = body["companies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["pe_ratio"].as_f64().unwrap())
        .collect();
    assert_eq!(pe.len(), 5);
    assert!(pe.windows(2).all(|w| w[0] <= w[1]));
}

#[tokio::test]
async fn compare_is_all_or_nothing() {
    let (status, body) = post_json(
        "/api/v1/sectors/compare",
        r#"{"sector_ids":["banking-finance","not-a-real-sector"],"timeframe":"1M"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("comparison").is_none());
}

#[tokio::test]
async fn compare_returns_requested_sectors() {
    let (status, body) = post_json(
        "/api/v1/sectors/compare",
        r#"{"sector_ids":["cement","fertilizer"],"timeframe":"6M","metrics":["pe_ratio"]}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["comparison"].as_array().unwrap().len(), 2);
    assert_eq!(body["comparison"][1]["id"], "fertilizer");
    assert_eq!(body["metrics"][0], "pe_ratio");
}

#[tokio::test]
async fn compare_rejects_empty_ids() {
    let (status, body) = post_json("/api/v1/sectors/compare", r#"{"sector_ids":[]}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("sector_ids"));
}

#[tokio::test]
async fn malformed_limit_keeps_json_error_shape() {
    let (status, body) = get("/api/v1/sectors/cement/companies?limit=-1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("query string"));
}

#[tokio::test]
async fn malformed_compare_body_keeps_json_error_shape() {
    let (status, body) = post_json("/api/v1/sectors/compare", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}
