//! Integration tests for traffic reporting.

use chrono::{Duration, Utc};
use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn traffic_report_folds_bytes_into_used_volume() {
    let app = TestApp::new();
    let account_id = app
        .seed_account(
            "alice",
            "secret123",
            netgate_entity::AccountStatus::active(),
            100.0,
            Utc::now() + Duration::days(30),
        )
        .await;

    // 5 MiB up + 5 MiB down = 10 MB.
    let resp = app
        .request(
            "POST",
            &format!("/api/accounts/{account_id}/traffic"),
            Some(serde_json::json!({
                "upload_bytes": 5_242_880u64,
                "download_bytes": 5_242_880u64,
            })),
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["used_volume_mb"], 110.0);

    // The entitlement view reflects the new figure.
    let snapshot = app
        .request("GET", &format!("/api/accounts/{account_id}/entitlement"), None)
        .await;
    assert_eq!(
        snapshot.body["data"]["entitlement"]["used_volume_mb"],
        110.0
    );
}

#[tokio::test]
async fn traffic_for_unknown_account_is_a_404() {
    let app = TestApp::new();

    let resp = app
        .request(
            "POST",
            &format!("/api/accounts/{}/traffic", Uuid::new_v4()),
            Some(serde_json::json!({ "upload_bytes": 1, "download_bytes": 1 })),
        )
        .await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body["error"], "ACCOUNT_NOT_FOUND");
}
