//! Device admission configuration.

use serde::{Deserialize, Serialize};

/// Device admission settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmissionConfig {
    /// Maximum number of concurrently active devices per account.
    #[serde(default = "default_max_active_devices")]
    pub max_active_devices: u32,
    /// Length in bytes of the random session token issued on login.
    /// The token is hex-encoded, so the string is twice this length.
    #[serde(default = "default_token_length")]
    pub token_length_bytes: usize,
}

impl Default for AdmissionConfig {
    fn default() -> Self {
        Self {
            max_active_devices: default_max_active_devices(),
            token_length_bytes: default_token_length(),
        }
    }
}

fn default_max_active_devices() -> u32 {
    2
}

fn default_token_length() -> usize {
    32
}
