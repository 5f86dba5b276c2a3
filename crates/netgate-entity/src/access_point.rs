//! Access point catalog entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A network access point in the static catalog.
///
/// The catalog is read-only from the gateway's perspective: rows are
/// managed by provisioning, and only `online` entries are served.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AccessPoint {
    /// Unique access point identifier.
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Client-facing share link.
    pub share_link: String,
    /// Availability status; `"online"` rows are listed.
    pub status: String,
    /// When the access point was registered.
    pub created_at: DateTime<Utc>,
}

impl AccessPoint {
    /// Whether this access point should be served to clients.
    pub fn is_online(&self) -> bool {
        self.status == "online"
    }
}
