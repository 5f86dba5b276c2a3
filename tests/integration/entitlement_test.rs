//! Integration tests for the standalone entitlement query.

use chrono::{Duration, Utc};
use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn entitlement_snapshot_reports_remaining_volume_and_days() {
    let app = TestApp::new();
    let account_id = app
        .seed_account(
            "alice",
            "secret123",
            netgate_entity::AccountStatus::active(),
            400.0,
            Utc::now() + Duration::days(10) + Duration::hours(1),
        )
        .await;

    let resp = app
        .request("GET", &format!("/api/accounts/{account_id}/entitlement"), None)
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    let data = &resp.body["data"];
    assert_eq!(data["username"], "alice");
    assert_eq!(data["entitlement"]["remaining_volume_mb"], 600.0);
    assert_eq!(data["entitlement"]["remaining_days"], 10);
    assert_eq!(data["entitlement"]["expired"], false);
}

#[tokio::test]
async fn expired_account_is_still_readable() {
    let app = TestApp::new();
    let account_id = app
        .seed_account(
            "bob",
            "secret123",
            netgate_entity::AccountStatus::active(),
            1200.0,
            Utc::now() - Duration::days(3),
        )
        .await;

    let resp = app
        .request("GET", &format!("/api/accounts/{account_id}/entitlement"), None)
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    let entitlement = &resp.body["data"]["entitlement"];
    assert_eq!(entitlement["expired"], true);
    assert_eq!(entitlement["remaining_days"], 0);
    assert_eq!(entitlement["remaining_volume_mb"], 0.0);
}

#[tokio::test]
async fn unknown_account_is_a_404() {
    let app = TestApp::new();

    let resp = app
        .request(
            "GET",
            &format!("/api/accounts/{}/entitlement", Uuid::new_v4()),
            None,
        )
        .await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body["error"], "ACCOUNT_NOT_FOUND");
}
