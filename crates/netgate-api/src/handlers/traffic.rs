//! Traffic report handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::dto::request::RecordTrafficRequest;
use crate::dto::response::{ApiResponse, TrafficResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/accounts/{id}/traffic
pub async fn record_traffic(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
    Json(req): Json<RecordTrafficRequest>,
) -> Result<Json<ApiResponse<TrafficResponse>>, ApiError> {
    let used_volume_mb = state
        .traffic
        .record_traffic(account_id, req.upload_bytes, req.download_bytes)
        .await?;

    Ok(Json(ApiResponse::ok(TrafficResponse { used_volume_mb })))
}
