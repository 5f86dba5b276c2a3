//! Device session handlers.

use axum::Json;
use axum::extract::{Path, State};
use chrono::Utc;
use uuid::Uuid;

use crate::dto::request::SetDeviceStatusRequest;
use crate::dto::response::{ApiResponse, DeviceResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/devices/{username}
pub async fn list_devices(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<Vec<DeviceResponse>>>, ApiError> {
    let sessions = state.devices.list_devices(&username).await?;
    let devices = sessions.into_iter().map(DeviceResponse::from).collect();

    Ok(Json(ApiResponse::ok(devices)))
}

/// PUT /api/accounts/{id}/devices/{device_name}/status
pub async fn set_device_status(
    State(state): State<AppState>,
    Path((account_id, device_name)): Path<(Uuid, String)>,
    Json(req): Json<SetDeviceStatusRequest>,
) -> Result<Json<ApiResponse<DeviceResponse>>, ApiError> {
    let session = state
        .devices
        .set_device_active(account_id, &device_name, req.active, Utc::now())
        .await?;

    Ok(Json(ApiResponse::ok(session.into())))
}
