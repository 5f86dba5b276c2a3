//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
    /// Client-chosen device name, unique per account.
    pub device_name: String,
}

/// Traffic report body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordTrafficRequest {
    /// Uploaded bytes since the last report.
    pub upload_bytes: u64,
    /// Downloaded bytes since the last report.
    pub download_bytes: u64,
}

/// Device status toggle body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetDeviceStatusRequest {
    /// Target active state; `false` is a logout.
    pub active: bool,
}
