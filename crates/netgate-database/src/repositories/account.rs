//! Account repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use netgate_core::error::{AppError, ErrorKind};
use netgate_core::result::AppResult;
use netgate_entity::Account;

use crate::store::AccountStore;

/// Repository for account lookup and traffic accumulation.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::StoreUnavailable,
                    "Failed to find account by id",
                    e,
                )
            })
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE LOWER(username) = LOWER($1)")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::StoreUnavailable,
                    "Failed to find account by username",
                    e,
                )
            })
    }

    async fn add_used_volume(&self, id: Uuid, delta_mb: f64) -> AppResult<f64> {
        // Single statement, so concurrent reports cannot lose updates.
        sqlx::query_scalar::<_, f64>(
            "UPDATE accounts SET used_volume_mb = used_volume_mb + $2, updated_at = NOW() \
             WHERE id = $1 RETURNING used_volume_mb",
        )
        .bind(id)
        .bind(delta_mb)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::StoreUnavailable,
                "Failed to accumulate used volume",
                e,
            )
        })?
        .ok_or_else(|| AppError::account_not_found(format!("Account {id} not found")))
    }
}
