//! Device session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A named device's login record for an account.
///
/// Identified by the composite (`account_id`, `device_name`) pair. Rows
/// are created on first login from an unseen device name and toggled
/// active/inactive afterwards; they are never deleted.
///
/// Invariant: per account, at most the configured maximum of rows may
/// have `is_active = true` at any time. The store's `admit` operation
/// preserves this under concurrent logins.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DeviceSession {
    /// The owning account.
    pub account_id: Uuid,
    /// Client-chosen device name, unique per account.
    pub device_name: String,
    /// Whether the device currently holds an active session.
    pub is_active: bool,
    /// Last login or status-toggle time for this device.
    pub last_seen_at: DateTime<Utc>,
    /// When the device was first seen.
    pub created_at: DateTime<Utc>,
}
