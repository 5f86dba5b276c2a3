//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::AccountStatus;

/// A subscriber account.
///
/// Accounts are provisioned out-of-band. The gateway only reads them and
/// folds reported traffic into `used_volume_mb`; every other field is
/// mutated by external provisioning.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Unique login name.
    pub username: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Account standing; only `"active"` may log in.
    pub status: AccountStatus,
    /// Total subscription volume in megabytes.
    pub total_volume_mb: f64,
    /// Consumed volume in megabytes. Non-decreasing outside provisioning.
    pub used_volume_mb: f64,
    /// Subscription cutoff date.
    pub expiry_date: DateTime<Utc>,
    /// Nominal subscription length in days, stored independently of
    /// `expiry_date`.
    pub total_days: i32,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Whether the account's status permits login.
    pub fn can_login(&self) -> bool {
        self.status.is_active()
    }
}
