//! Device session repository implementation.
//!
//! The admission decision runs inside a transaction that first locks the
//! account row (`SELECT ... FOR UPDATE`), so concurrent logins for the
//! same account serialize while different accounts proceed in parallel.
//! The composite primary key on (`account_id`, `device_name`) backs the
//! insert path as a second line of defense against duplicate rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use netgate_core::error::{AppError, ErrorKind};
use netgate_core::result::AppResult;
use netgate_entity::DeviceSession;

use crate::store::{AdmissionOutcome, DeviceSessionStore};

/// Repository for device session admission and queries.
#[derive(Debug, Clone)]
pub struct DeviceSessionRepository {
    pool: PgPool,
}

impl DeviceSessionRepository {
    /// Create a new device session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn store_err(
    context: &'static str,
) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::StoreUnavailable, context, e)
}

#[async_trait]
impl DeviceSessionStore for DeviceSessionRepository {
    async fn admit(
        &self,
        account_id: Uuid,
        device_name: &str,
        max_active: u32,
        now: DateTime<Utc>,
    ) -> AppResult<AdmissionOutcome> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(store_err("Failed to begin admission transaction"))?;

        // Per-account exclusive lock for the duration of the decision.
        let locked: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM accounts WHERE id = $1 FOR UPDATE")
                .bind(account_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(store_err("Failed to lock account for admission"))?;

        if locked.is_none() {
            return Err(AppError::account_not_found(format!(
                "Account {account_id} not found"
            )));
        }

        let existing = sqlx::query_as::<_, DeviceSession>(
            "SELECT * FROM device_sessions WHERE account_id = $1 AND device_name = $2",
        )
        .bind(account_id)
        .bind(device_name)
        .fetch_optional(&mut *tx)
        .await
        .map_err(store_err("Failed to look up device session"))?;

        match existing {
            // Re-login from an already-active device: refresh and admit.
            Some(session) if session.is_active => {
                let session = sqlx::query_as::<_, DeviceSession>(
                    "UPDATE device_sessions SET last_seen_at = $3 \
                     WHERE account_id = $1 AND device_name = $2 RETURNING *",
                )
                .bind(account_id)
                .bind(device_name)
                .bind(now)
                .fetch_one(&mut *tx)
                .await
                .map_err(store_err("Failed to refresh device session"))?;

                tx.commit()
                    .await
                    .map_err(store_err("Failed to commit admission"))?;

                debug!(%account_id, device_name, "Device re-login");
                Ok(AdmissionOutcome::Admitted {
                    session,
                    reused: true,
                })
            }
            // Known but inactive device: reactivation takes an active
            // slot like a new device.
            Some(_) => {
                let active_count = count_active_in_tx(&mut tx, account_id).await?;
                if active_count >= i64::from(max_active) {
                    tx.rollback()
                        .await
                        .map_err(store_err("Failed to roll back refused admission"))?;
                    return Ok(AdmissionOutcome::LimitExceeded { active_count });
                }

                let session = sqlx::query_as::<_, DeviceSession>(
                    "UPDATE device_sessions SET is_active = TRUE, last_seen_at = $3 \
                     WHERE account_id = $1 AND device_name = $2 RETURNING *",
                )
                .bind(account_id)
                .bind(device_name)
                .bind(now)
                .fetch_one(&mut *tx)
                .await
                .map_err(store_err("Failed to reactivate device session"))?;

                tx.commit()
                    .await
                    .map_err(store_err("Failed to commit admission"))?;

                debug!(%account_id, device_name, "Device reactivated");
                Ok(AdmissionOutcome::Admitted {
                    session,
                    reused: false,
                })
            }
            // New device name: admit only below the cap.
            None => {
                let active_count = count_active_in_tx(&mut tx, account_id).await?;
                if active_count >= i64::from(max_active) {
                    tx.rollback()
                        .await
                        .map_err(store_err("Failed to roll back refused admission"))?;
                    return Ok(AdmissionOutcome::LimitExceeded { active_count });
                }

                let session = sqlx::query_as::<_, DeviceSession>(
                    "INSERT INTO device_sessions (account_id, device_name, is_active, last_seen_at, created_at) \
                     VALUES ($1, $2, TRUE, $3, $3) RETURNING *",
                )
                .bind(account_id)
                .bind(device_name)
                .bind(now)
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| match e {
                    sqlx::Error::Database(ref db_err)
                        if db_err.constraint() == Some("device_sessions_pkey") =>
                    {
                        // Lost an insert race despite the account lock.
                        AppError::store_unavailable("Concurrent admission for this device")
                    }
                    _ => AppError::with_source(
                        ErrorKind::StoreUnavailable,
                        "Failed to create device session",
                        e,
                    ),
                })?;

                tx.commit()
                    .await
                    .map_err(store_err("Failed to commit admission"))?;

                debug!(%account_id, device_name, "Device admitted");
                Ok(AdmissionOutcome::Admitted {
                    session,
                    reused: false,
                })
            }
        }
    }

    async fn set_active(
        &self,
        account_id: Uuid,
        device_name: &str,
        active: bool,
        now: DateTime<Utc>,
    ) -> AppResult<DeviceSession> {
        sqlx::query_as::<_, DeviceSession>(
            "UPDATE device_sessions SET is_active = $3, last_seen_at = $4 \
             WHERE account_id = $1 AND device_name = $2 RETURNING *",
        )
        .bind(account_id)
        .bind(device_name)
        .bind(active)
        .bind(now)
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err("Failed to update device status"))?
        .ok_or_else(|| {
            AppError::device_not_found(format!(
                "No device '{device_name}' recorded for account {account_id}"
            ))
        })
    }

    async fn list_by_account(&self, account_id: Uuid) -> AppResult<Vec<DeviceSession>> {
        sqlx::query_as::<_, DeviceSession>(
            "SELECT * FROM device_sessions WHERE account_id = $1 ORDER BY device_name ASC",
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err("Failed to list device sessions"))
    }

    async fn count_active(&self, account_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM device_sessions WHERE account_id = $1 AND is_active",
        )
        .bind(account_id)
        .fetch_one(&self.pool)
        .await
        .map_err(store_err("Failed to count active devices"))
    }
}

async fn count_active_in_tx(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    account_id: Uuid,
) -> AppResult<i64> {
    sqlx::query_scalar("SELECT COUNT(*) FROM device_sessions WHERE account_id = $1 AND is_active")
        .bind(account_id)
        .fetch_one(&mut **tx)
        .await
        .map_err(store_err("Failed to count active devices"))
}
