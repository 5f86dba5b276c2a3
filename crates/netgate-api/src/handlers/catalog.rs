//! Access point catalog handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{AccessPointResponse, ApiResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/access-points
pub async fn list_access_points(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<AccessPointResponse>>>, ApiError> {
    let points = state.catalog.list_online().await?;
    let points = points.into_iter().map(AccessPointResponse::from).collect();

    Ok(Json(ApiResponse::ok(points)))
}
