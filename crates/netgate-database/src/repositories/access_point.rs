//! Access point catalog repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use netgate_core::error::{AppError, ErrorKind};
use netgate_core::result::AppResult;
use netgate_entity::AccessPoint;

use crate::store::AccessPointCatalog;

/// Repository for the read-only access point catalog.
#[derive(Debug, Clone)]
pub struct AccessPointRepository {
    pool: PgPool,
}

impl AccessPointRepository {
    /// Create a new access point repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccessPointCatalog for AccessPointRepository {
    async fn list_online(&self) -> AppResult<Vec<AccessPoint>> {
        sqlx::query_as::<_, AccessPoint>(
            "SELECT * FROM access_points WHERE status = 'online' ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::StoreUnavailable,
                "Failed to list access points",
                e,
            )
        })
    }
}
