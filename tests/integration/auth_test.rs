//! Integration tests for login admission and the device limit.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn login_returns_token_and_entitlement() {
    let app = TestApp::new();
    app.seed_active_account("alice", "secret123").await;

    let resp = app.login("alice", "secret123", "phone").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["success"], true);

    let data = &resp.body["data"];
    assert_eq!(data["username"], "alice");
    assert_eq!(data["device"]["device_name"], "phone");
    assert_eq!(data["device"]["is_active"], true);
    assert_eq!(data["entitlement"]["expired"], false);

    let token = data["token"].as_str().expect("No token in login response");
    assert_eq!(token.len(), 64);
}

#[tokio::test]
async fn wrong_password_and_unknown_user_get_the_same_401() {
    let app = TestApp::new();
    app.seed_active_account("alice", "secret123").await;

    let wrong_password = app.login("alice", "nope", "phone").await;
    let unknown_user = app.login("nobody", "nope", "phone").await;

    assert_eq!(wrong_password.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.body["message"], unknown_user.body["message"]);
    assert_eq!(wrong_password.body["error"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn suspended_account_gets_403_with_status_in_message() {
    let app = TestApp::new();
    app.seed_account(
        "bob",
        "secret123",
        netgate_entity::AccountStatus::suspended(),
        0.0,
        chrono::Utc::now() + chrono::Duration::days(30),
    )
    .await;

    let resp = app.login("bob", "secret123", "phone").await;

    assert_eq!(resp.status, StatusCode::FORBIDDEN);
    assert_eq!(resp.body["error"], "ACCOUNT_NOT_ACTIVE");
    assert!(
        resp.body["message"]
            .as_str()
            .unwrap()
            .contains("suspended")
    );
}

#[tokio::test]
async fn expired_subscription_gets_403() {
    let app = TestApp::new();
    app.seed_account(
        "carol",
        "secret123",
        netgate_entity::AccountStatus::active(),
        0.0,
        chrono::Utc::now() - chrono::Duration::days(1),
    )
    .await;

    let resp = app.login("carol", "secret123", "phone").await;

    assert_eq!(resp.status, StatusCode::FORBIDDEN);
    assert_eq!(resp.body["error"], "SUBSCRIPTION_EXPIRED");
}

#[tokio::test]
async fn third_device_is_refused_with_409() {
    let app = TestApp::new();
    app.seed_active_account("alice", "secret123").await;

    assert_eq!(
        app.login("alice", "secret123", "phone").await.status,
        StatusCode::OK
    );
    assert_eq!(
        app.login("alice", "secret123", "laptop").await.status,
        StatusCode::OK
    );

    let third = app.login("alice", "secret123", "tablet").await;
    assert_eq!(third.status, StatusCode::CONFLICT);
    assert_eq!(third.body["error"], "DEVICE_LIMIT_EXCEEDED");
}

#[tokio::test]
async fn relogin_from_a_known_device_is_not_a_new_slot() {
    let app = TestApp::new();
    app.seed_active_account("alice", "secret123").await;

    assert_eq!(
        app.login("alice", "secret123", "phone").await.status,
        StatusCode::OK
    );
    assert_eq!(
        app.login("alice", "secret123", "laptop").await.status,
        StatusCode::OK
    );

    // Same device again: admitted, no limit error.
    let again = app.login("alice", "secret123", "phone").await;
    assert_eq!(again.status, StatusCode::OK);
}

#[tokio::test]
async fn empty_device_name_is_a_400() {
    let app = TestApp::new();
    app.seed_active_account("alice", "secret123").await;

    let resp = app.login("alice", "secret123", "  ").await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["error"], "VALIDATION");
}
