//! Integration tests for device listing and status toggles.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn devices_are_listed_by_name_for_a_username() {
    let app = TestApp::new();
    app.seed_active_account("alice", "secret123").await;
    app.login("alice", "secret123", "phone").await;
    app.login("alice", "secret123", "laptop").await;

    let resp = app.request("GET", "/api/devices/alice", None).await;

    assert_eq!(resp.status, StatusCode::OK);
    let names: Vec<&str> = resp.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["device_name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["laptop", "phone"]);
}

#[tokio::test]
async fn known_account_with_no_devices_is_an_empty_list_not_a_404() {
    let app = TestApp::new();
    app.seed_active_account("alice", "secret123").await;

    let resp = app.request("GET", "/api/devices/alice", None).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn unknown_username_is_a_404() {
    let app = TestApp::new();

    let resp = app.request("GET", "/api/devices/nobody", None).await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body["error"], "ACCOUNT_NOT_FOUND");
}

#[tokio::test]
async fn logout_frees_a_slot_for_a_new_device() {
    let app = TestApp::new();
    let account_id = app.seed_active_account("alice", "secret123").await;
    app.login("alice", "secret123", "phone").await;
    app.login("alice", "secret123", "laptop").await;

    // Deactivate one device.
    let resp = app
        .request(
            "PUT",
            &format!("/api/accounts/{account_id}/devices/phone/status"),
            Some(serde_json::json!({ "active": false })),
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["data"]["is_active"], false);

    // A third device now fits.
    let third = app.login("alice", "secret123", "tablet").await;
    assert_eq!(third.status, StatusCode::OK);

    // The logged-out device stays listed, inactive.
    let list = app.request("GET", "/api/devices/alice", None).await;
    let devices = list.body["data"].as_array().unwrap().clone();
    assert_eq!(devices.len(), 3);
    let phone = devices
        .iter()
        .find(|d| d["device_name"] == "phone")
        .unwrap();
    assert_eq!(phone["is_active"], false);
}

#[tokio::test]
async fn toggling_an_unknown_device_is_a_404() {
    let app = TestApp::new();
    let account_id = app.seed_active_account("alice", "secret123").await;

    let resp = app
        .request(
            "PUT",
            &format!("/api/accounts/{account_id}/devices/ghost/status"),
            Some(serde_json::json!({ "active": false })),
        )
        .await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(resp.body["error"], "DEVICE_NOT_FOUND");
}

#[tokio::test]
async fn device_routes_reject_unknown_account_ids() {
    let app = TestApp::new();

    let resp = app
        .request(
            "PUT",
            &format!("/api/accounts/{}/devices/phone/status", Uuid::new_v4()),
            Some(serde_json::json!({ "active": true })),
        )
        .await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
