//! Entitlement query handlers.

use axum::Json;
use axum::extract::{Path, State};
use chrono::Utc;
use uuid::Uuid;

use crate::dto::response::{AccountEntitlementResponse, ApiResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/accounts/{id}/entitlement
pub async fn get_entitlement(
    State(state): State<AppState>,
    Path(account_id): Path<Uuid>,
) -> Result<Json<ApiResponse<AccountEntitlementResponse>>, ApiError> {
    let snapshot = state
        .entitlements
        .get_entitlement(account_id, Utc::now())
        .await?;

    Ok(Json(ApiResponse::ok(snapshot.into())))
}
