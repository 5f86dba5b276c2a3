//! Device session queries and explicit status toggles.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use netgate_core::error::AppError;
use netgate_core::result::AppResult;
use netgate_database::store::{AccountStore, DeviceSessionStore};
use netgate_entity::DeviceSession;

/// Device session management outside the login path.
#[derive(Debug, Clone)]
pub struct DeviceService {
    /// Account lookups.
    accounts: Arc<dyn AccountStore>,
    /// Device session state.
    devices: Arc<dyn DeviceSessionStore>,
}

impl DeviceService {
    /// Creates a new device service.
    pub fn new(accounts: Arc<dyn AccountStore>, devices: Arc<dyn DeviceSessionStore>) -> Self {
        Self { accounts, devices }
    }

    /// Toggles a device's active flag — an explicit logout (or
    /// re-activation) independent of login.
    pub async fn set_device_active(
        &self,
        account_id: Uuid,
        device_name: &str,
        active: bool,
        now: DateTime<Utc>,
    ) -> AppResult<DeviceSession> {
        let session = self
            .devices
            .set_active(account_id, device_name, active, now)
            .await?;

        info!(%account_id, device_name, active, "Device status updated");
        Ok(session)
    }

    /// Lists an account's device sessions by username, ordered by device
    /// name.
    ///
    /// An unknown username fails with `AccountNotFound`; a known account
    /// with no recorded devices returns an empty list. The two cases are
    /// deliberately distinguishable.
    pub async fn list_devices(&self, username: &str) -> AppResult<Vec<DeviceSession>> {
        let account = self
            .accounts
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                AppError::account_not_found(format!("No account for username '{username}'"))
            })?;

        self.devices.list_by_account(account.id).await
    }
}
