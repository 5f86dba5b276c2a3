//! Auth handlers — login admission.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    let result = state
        .admission
        .login(&req.username, &req.password, &req.device_name, Utc::now())
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: result.token,
        account_id: result.account_id,
        username: result.username,
        entitlement: result.entitlement.into(),
        device: result.device.into(),
    })))
}
