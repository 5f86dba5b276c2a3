//! Entitlement queries — point-in-time account facts.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use netgate_core::error::AppError;
use netgate_core::result::AppResult;
use netgate_database::store::AccountStore;
use netgate_entity::{AccountStatus, Entitlement};

/// An account's identity and its derived entitlement figures.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AccountEntitlement {
    /// The account id.
    pub account_id: Uuid,
    /// The account's username.
    pub username: String,
    /// The stored account status.
    pub status: AccountStatus,
    /// Derived entitlement snapshot.
    pub entitlement: Entitlement,
}

/// Read-only entitlement reporting.
///
/// Unlike login, this reports facts for expired or suspended accounts
/// too; only admission refuses them.
#[derive(Debug, Clone)]
pub struct EntitlementService {
    /// Account lookups.
    accounts: Arc<dyn AccountStore>,
}

impl EntitlementService {
    /// Creates a new entitlement service.
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }

    /// Gets the entitlement snapshot for an account.
    pub async fn get_entitlement(
        &self,
        account_id: Uuid,
        now: DateTime<Utc>,
    ) -> AppResult<AccountEntitlement> {
        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| AppError::account_not_found(format!("Account {account_id} not found")))?;

        Ok(AccountEntitlement {
            account_id: account.id,
            username: account.username.clone(),
            status: account.status.clone(),
            entitlement: Entitlement::evaluate(&account, now),
        })
    }
}
