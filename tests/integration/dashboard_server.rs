//! Integration tests for the dashboard server
//!
//! Covers the startup sequence, the page, the dropdown callback and the
//! health/metrics endpoints.

#[path = "dashboard_server/test_utils.rs"]
mod server_utils;

use serde_json::Value;
use shortvol::core::bootstrap::bootstrap;
use shortvol::models::Symbol;
use shortvol::services::FinraClient;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{mock_symbol, LATEST_DAY};
use server_utils::TestDashboardServer;

#[tokio::test]
async fn bootstrap_fetches_symbol_then_ranking() {
    let app = TestDashboardServer::new().await;

    let requests = app.finra.received_requests().await.expect("wiremock requests");
    assert_eq!(requests.len(), 2);
    let first: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let second: Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert_eq!(first["compareFilters"][0]["fieldValue"], "AAPL");
    assert_eq!(second["compareFilters"][0]["fieldValue"], LATEST_DAY);
    assert_eq!(second["limit"], 5000);
}

#[tokio::test]
async fn bootstrap_fails_when_ranking_is_unavailable() {
    let finra = MockServer::start().await;
    mock_symbol(&finra, "AAPL").await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&finra)
        .await;

    let client = FinraClient::new(&finra.uri());
    assert!(bootstrap(&client, &Symbol::default()).await.is_err());
}

#[tokio::test]
async fn index_renders_layout_with_sorted_choices() {
    let app = TestDashboardServer::new().await;
    let response = app.server.get("/").await;
    assert_eq!(response.status_code(), 200);

    let page = response.text();
    assert!(page.contains("<title>Short Volume Analysis</title>"));
    let aapl = page.find(r#"<option value="AAPL" selected>"#).expect("AAPL option");
    let gme = page.find(r#"<option value="GME">"#).expect("GME option");
    let tsla = page.find(r#"<option value="TSLA">"#).expect("TSLA option");
    assert!(aapl < gme && gme < tsla);
    assert!(!page.contains(r#"<option value="EDGE">"#));
    assert!(page.contains("Volume and PVO"));
    assert!(page.contains("Long / Short Volume"));
    assert!(page.contains("Most Shorted Stocks"));
}

#[tokio::test]
async fn callback_returns_two_dependent_charts() {
    let app = TestDashboardServer::new().await;
    let response = app.server.get("/api/charts/msft").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["symbol"], "MSFT");
    assert_eq!(body["latest_day"], LATEST_DAY);
    assert_eq!(body["pvo"]["layout"]["title"]["text"], "Volume and PVO");
    assert_eq!(body["long_short"]["layout"]["title"]["text"], "Long / Short Volume");
    assert_eq!(body["long_short"]["layout"]["barmode"], "stack");

    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert!(!object.contains_key("ranking"));

    let pvo_traces = body["pvo"]["data"].as_array().unwrap();
    assert_eq!(pvo_traces.len(), 3);
    assert_eq!(pvo_traces[2]["y"][4], 250.0);
}

#[tokio::test]
async fn callback_leaves_ranking_chart_unchanged() {
    let app = TestDashboardServer::new().await;
    let before: Value = app.server.get("/api/ranking").await.json();

    let response = app.server.get("/api/charts/MSFT").await;
    assert_eq!(response.status_code(), 200);

    let after: Value = app.server.get("/api/ranking").await.json();
    assert_eq!(before, after);
    assert_eq!(after["day"], LATEST_DAY);
    let bars = &after["figure"]["data"][0];
    assert_eq!(bars["x"][0], "GME");
    assert_eq!(bars["x"].as_array().unwrap().len(), 3);
    // only the bootstrap ranking request ever reached FINRA
    let requests = app.finra.received_requests().await.unwrap();
    let ranking_requests = requests
        .iter()
        .filter(|r| String::from_utf8_lossy(&r.body).contains("tradeReportDate"))
        .count();
    assert_eq!(ranking_requests, 1);
}

#[tokio::test]
async fn invalid_symbol_is_rejected_before_upstream_call() {
    let app = TestDashboardServer::new().await;
    let before = app.finra_request_count().await;

    let response = app.server.get("/api/charts/A_B").await;
    assert_eq!(response.status_code(), 400);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Invalid symbol"));

    assert_eq!(app.finra_request_count().await, before);
}

#[tokio::test]
async fn mixed_case_symbol_is_rejected_before_upstream_call() {
    let app = TestDashboardServer::new().await;
    let before = app.finra_request_count().await;

    let response = app.server.get("/api/charts/MsFt").await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(app.finra_request_count().await, before);
}

#[tokio::test]
async fn unknown_symbol_is_not_found() {
    let app = TestDashboardServer::new().await;
    let response = app.server.get("/api/charts/NOPE").await;
    assert_eq!(response.status_code(), 404);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("NOPE"));
}

#[tokio::test]
async fn upstream_failure_is_bad_gateway() {
    let app = TestDashboardServer::new().await;
    // no mock is mounted for IBM, so wiremock answers 404
    let response = app.server.get("/api/charts/IBM").await;
    assert_eq!(response.status_code(), 502);
}

#[tokio::test]
async fn health_endpoint_reports_healthy_status() {
    let app = TestDashboardServer::new().await;
    let response = app.server.get("/health").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["uptime_seconds"].as_u64().is_some());
    assert_eq!(body["service"], "shortvol-dashboard");
    assert_eq!(body["ranking_day"], "2024-05-10");
    assert_eq!(body["choices"], 3);
}

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    let app = TestDashboardServer::new().await;
    let _ = app.server.get("/health").await;

    let response = app.server.get("/metrics").await;
    assert_eq!(response.status_code(), 200);

    let body = response.text();
    assert!(body.contains("http_requests_total"));
    assert!(body.contains("http_request_duration_seconds"));
    assert!(body.contains("http_requests_in_flight"));
    assert!(body.contains("finra_requests_total"));
    assert!(body.contains(r#"query="ranking""#));
}
