//! Integration tests for the access point catalog and health check.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn catalog_lists_only_online_access_points() {
    let app = TestApp::new();
    app.seed_access_point("tokyo-1", "online").await;
    app.seed_access_point("osaka-1", "offline").await;
    app.seed_access_point("nagoya-1", "online").await;

    let resp = app.request("GET", "/api/access-points", None).await;

    assert_eq!(resp.status, StatusCode::OK);
    let names: Vec<&str> = resp.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["nagoya-1", "tokyo-1"]);
}

#[tokio::test]
async fn health_check_reports_ok() {
    let app = TestApp::new();

    let resp = app.request("GET", "/api/health", None).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["status"], "ok");
}
