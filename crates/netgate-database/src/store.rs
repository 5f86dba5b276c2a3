//! Store traits abstracting the durable state behind the gateway.
//!
//! The admission controller and the services are injected with these
//! traits rather than concrete backends. Methods that read-then-write
//! related rows (`admit`, `add_used_volume`) are atomic units: the
//! backend must serialize them against other such calls for the same
//! account. Calls touching different accounts may proceed in parallel.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use netgate_core::result::AppResult;
use netgate_entity::{AccessPoint, Account, DeviceSession};

/// Result of an atomic device admission attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AdmissionOutcome {
    /// The device was admitted and its session row is active.
    Admitted {
        /// The created or refreshed session row.
        session: DeviceSession,
        /// True when the device was already active (a re-login).
        reused: bool,
    },
    /// The account is at its active-device cap and the device is new.
    /// No state was mutated.
    LimitExceeded {
        /// Active device count observed inside the atomic unit.
        active_count: i64,
    },
}

/// Read and accumulate access to accounts.
#[async_trait]
pub trait AccountStore: Send + Sync + std::fmt::Debug {
    /// Find an account by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>>;

    /// Find an account by username (case-insensitive).
    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>>;

    /// Atomically add `delta_mb` to the account's used volume and return
    /// the new value. Fails with `AccountNotFound` for unknown ids.
    ///
    /// Concurrent calls for the same account must not lose updates.
    async fn add_used_volume(&self, id: Uuid, delta_mb: f64) -> AppResult<f64>;
}

/// Device session state per account.
#[async_trait]
pub trait DeviceSessionStore: Send + Sync + std::fmt::Debug {
    /// Atomically decide and record admission for (`account_id`,
    /// `device_name`):
    ///
    /// - device already active: refresh `last_seen_at` and admit;
    /// - device new or inactive while the account already has
    ///   `max_active` active devices: refuse without mutating;
    /// - otherwise: create or reactivate the row and admit.
    ///
    /// The count check and the insert/update execute as one atomic unit
    /// per account. Fails with `AccountNotFound` for unknown accounts.
    async fn admit(
        &self,
        account_id: Uuid,
        device_name: &str,
        max_active: u32,
        now: DateTime<Utc>,
    ) -> AppResult<AdmissionOutcome>;

    /// Toggle a device's active flag (explicit logout or re-activation).
    /// Fails with `DeviceNotFound` if no row exists for the pair.
    async fn set_active(
        &self,
        account_id: Uuid,
        device_name: &str,
        active: bool,
        now: DateTime<Utc>,
    ) -> AppResult<DeviceSession>;

    /// List every device session for an account, ordered by
    /// `device_name` ascending. The order is part of the contract.
    async fn list_by_account(&self, account_id: Uuid) -> AppResult<Vec<DeviceSession>>;

    /// Count the account's active device sessions.
    async fn count_active(&self, account_id: Uuid) -> AppResult<i64>;
}

/// Read-only access point catalog.
#[async_trait]
pub trait AccessPointCatalog: Send + Sync + std::fmt::Debug {
    /// List online access points ordered by name.
    async fn list_online(&self) -> AppResult<Vec<AccessPoint>>;
}
