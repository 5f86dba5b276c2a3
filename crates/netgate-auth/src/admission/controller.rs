//! Admission controller — the login flow.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use netgate_core::config::AdmissionConfig;
use netgate_core::error::AppError;
use netgate_core::result::AppResult;
use netgate_database::store::{AccountStore, AdmissionOutcome, DeviceSessionStore};
use netgate_entity::{DeviceSession, Entitlement};

use crate::password::PasswordHasher;
use crate::token::TokenGenerator;

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LoginResult {
    /// Opaque session token. Informational only; never validated later.
    pub token: String,
    /// The authenticated account's id.
    pub account_id: Uuid,
    /// The authenticated account's username.
    pub username: String,
    /// Entitlement snapshot at login time.
    pub entitlement: Entitlement,
    /// The admitted device session.
    pub device: DeviceSession,
}

/// Gates login by account standing and device-slot availability, and
/// records the admitted device as active.
#[derive(Debug, Clone)]
pub struct AdmissionController {
    /// Account lookups.
    accounts: Arc<dyn AccountStore>,
    /// Device session state.
    devices: Arc<dyn DeviceSessionStore>,
    /// Password verification.
    hasher: Arc<PasswordHasher>,
    /// Session token source.
    tokens: TokenGenerator,
    /// Admission settings.
    config: AdmissionConfig,
}

impl AdmissionController {
    /// Creates a new admission controller.
    pub fn new(
        accounts: Arc<dyn AccountStore>,
        devices: Arc<dyn DeviceSessionStore>,
        hasher: Arc<PasswordHasher>,
        config: AdmissionConfig,
    ) -> Self {
        let tokens = TokenGenerator::new(config.token_length_bytes);
        Self {
            accounts,
            devices,
            hasher,
            tokens,
            config,
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Look up the account and verify the password
    /// 2. Check account standing
    /// 3. Check the subscription has not expired
    /// 4. Atomic device admission against the store
    /// 5. Issue a session token and return the entitlement snapshot
    ///
    /// Unknown usernames and wrong passwords produce the same error so
    /// usernames cannot be enumerated.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        device_name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<LoginResult> {
        if device_name.trim().is_empty() {
            return Err(AppError::validation("Device name cannot be empty"));
        }

        // Step 1: Credentials
        let account = match self.accounts.find_by_username(username).await? {
            Some(account) => account,
            None => {
                warn!(username, "Login attempt for unknown username");
                return Err(AppError::invalid_credentials());
            }
        };

        let password_valid = self
            .hasher
            .verify_password(password, &account.password_hash)?;
        if !password_valid {
            warn!(account_id = %account.id, "Login attempt with wrong password");
            return Err(AppError::invalid_credentials());
        }

        // Step 2: Account standing
        if !account.can_login() {
            warn!(
                account_id = %account.id,
                status = %account.status,
                "Login refused: account not active"
            );
            return Err(AppError::account_not_active(&account.status));
        }

        // Step 3: Entitlement gate
        let entitlement = Entitlement::evaluate(&account, now);
        if entitlement.expired {
            warn!(
                account_id = %account.id,
                expiry = %account.expiry_date,
                "Login refused: subscription expired"
            );
            return Err(AppError::subscription_expired());
        }

        // Step 4: Atomic device admission
        let outcome = self
            .devices
            .admit(account.id, device_name, self.config.max_active_devices, now)
            .await?;

        let device = match outcome {
            AdmissionOutcome::Admitted { session, reused } => {
                info!(
                    account_id = %account.id,
                    device_name,
                    reused,
                    "Device admitted"
                );
                session
            }
            AdmissionOutcome::LimitExceeded { active_count } => {
                warn!(
                    account_id = %account.id,
                    device_name,
                    active_count,
                    max = self.config.max_active_devices,
                    "Login refused: device limit exceeded"
                );
                return Err(AppError::device_limit_exceeded(
                    self.config.max_active_devices,
                ));
            }
        };

        // Step 5: Token + snapshot
        Ok(LoginResult {
            token: self.tokens.generate(),
            account_id: account.id,
            username: account.username,
            entitlement,
            device,
        })
    }
}
