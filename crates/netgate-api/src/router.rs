//! Route definitions for the Netgate HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(account_routes())
        .merge(device_routes())
        .merge(catalog_routes())
        .merge(health_routes());

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Auth endpoints: login admission
fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(handlers::auth::login))
}

/// Account-scoped endpoints: entitlement, traffic, device status
fn account_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/accounts/{id}/entitlement",
            get(handlers::entitlement::get_entitlement),
        )
        .route(
            "/accounts/{id}/traffic",
            post(handlers::traffic::record_traffic),
        )
        .route(
            "/accounts/{id}/devices/{device_name}/status",
            put(handlers::device::set_device_status),
        )
}

/// Device listing by username
fn device_routes() -> Router<AppState> {
    Router::new().route("/devices/{username}", get(handlers::device::list_devices))
}

/// Access point catalog
fn catalog_routes() -> Router<AppState> {
    Router::new().route(
        "/access-points",
        get(handlers::catalog::list_access_points),
    )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
