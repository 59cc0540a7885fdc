mod common;

use common::StubBackend;
use serde_json::Value;

#[tokio::test]
async fn test_health_page_with_healthy_backend() {
    let backend = StubBackend::start().await;
    let server = common::test_server(&backend.url());

    let response = server.get("/dashboard/health").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("All systems operational"));
    assert!(body.contains("2.3.1"));
}

#[tokio::test]
async fn test_health_page_with_unreachable_backend_degrades() {
    let backend_url = common::unreachable_backend_url().await;
    let server = common::test_server(&backend_url);

    let response = server.get("/dashboard/health").await;

    // A down backend degrades its card, never the page.
    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Degraded"));
    assert!(body.contains("Unknown"));
    assert!(body.contains("Network error occurred"));
}

#[tokio::test]
async fn test_healthz_reports_frontend_liveness_only() {
    // No backend at all; the liveness endpoint must still answer.
    let backend_url = common::unreachable_backend_url().await;
    let server = common::test_server(&backend_url);

    let response = server.get("/healthz").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["ok"], true);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime_seconds"].is_u64());
}
