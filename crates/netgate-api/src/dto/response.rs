//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use netgate_entity::{AccessPoint, DeviceSession, Entitlement};
use netgate_service::AccountEntitlement;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Entitlement snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementResponse {
    /// Whether the subscription has expired.
    pub expired: bool,
    /// Whole days left, clamped at zero.
    pub remaining_days: i64,
    /// Megabytes left, clamped at zero.
    pub remaining_volume_mb: f64,
    /// Total subscription volume in megabytes.
    pub total_volume_mb: f64,
    /// Consumed volume in megabytes.
    pub used_volume_mb: f64,
    /// Nominal subscription length in days.
    pub total_days: i32,
    /// Subscription cutoff date.
    pub expiry_date: DateTime<Utc>,
}

impl From<Entitlement> for EntitlementResponse {
    fn from(e: Entitlement) -> Self {
        Self {
            expired: e.expired,
            remaining_days: e.remaining_days,
            remaining_volume_mb: e.remaining_volume_mb,
            total_volume_mb: e.total_volume_mb,
            used_volume_mb: e.used_volume_mb,
            total_days: e.total_days,
            expiry_date: e.expiry_date,
        }
    }
}

/// Entitlement snapshot with account identity for the standalone query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountEntitlementResponse {
    /// Account ID.
    pub account_id: Uuid,
    /// Username.
    pub username: String,
    /// Stored account status.
    pub status: String,
    /// Derived entitlement.
    pub entitlement: EntitlementResponse,
}

impl From<AccountEntitlement> for AccountEntitlementResponse {
    fn from(snapshot: AccountEntitlement) -> Self {
        Self {
            account_id: snapshot.account_id,
            username: snapshot.username,
            status: snapshot.status.to_string(),
            entitlement: snapshot.entitlement.into(),
        }
    }
}

/// Device session summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceResponse {
    /// Client-chosen device name.
    pub device_name: String,
    /// Whether the device currently holds an active session.
    pub is_active: bool,
    /// Last login or status-toggle time.
    pub last_seen_at: DateTime<Utc>,
    /// When the device was first seen.
    pub created_at: DateTime<Utc>,
}

impl From<DeviceSession> for DeviceResponse {
    fn from(session: DeviceSession) -> Self {
        Self {
            device_name: session.device_name,
            is_active: session.is_active,
            last_seen_at: session.last_seen_at,
            created_at: session.created_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token.
    pub token: String,
    /// Account ID.
    pub account_id: Uuid,
    /// Username.
    pub username: String,
    /// Entitlement snapshot at login time.
    pub entitlement: EntitlementResponse,
    /// The admitted device session.
    pub device: DeviceResponse,
}

/// Access point catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessPointResponse {
    /// Access point ID.
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Client-facing share link.
    pub share_link: String,
    /// Availability status.
    pub status: String,
}

impl From<AccessPoint> for AccessPointResponse {
    fn from(point: AccessPoint) -> Self {
        Self {
            id: point.id,
            name: point.name,
            share_link: point.share_link,
            status: point.status,
        }
    }
}

/// Traffic report acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficResponse {
    /// Used volume in megabytes after the report was folded in.
    pub used_volume_mb: f64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}
