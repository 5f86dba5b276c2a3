//! In-memory store using a Tokio mutex for single-node deployments.
//!
//! Implements the same store traits as the PostgreSQL repositories, with
//! the whole table set behind one mutex. Holding the lock across each
//! admission decision gives the per-account atomic unit the traits
//! require (coarser than the row lock the Postgres backend takes, which
//! is fine for a single node). Used by development mode and unit tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use uuid::Uuid;

use netgate_core::error::AppError;
use netgate_core::result::AppResult;
use netgate_entity::{AccessPoint, Account, DeviceSession};

use crate::store::{
    AccessPointCatalog, AccountStore, AdmissionOutcome, DeviceSessionStore,
};

/// Internal table set for the memory store.
#[derive(Debug, Default)]
struct Inner {
    accounts: HashMap<Uuid, Account>,
    /// Device rows per account, keyed by device name. BTreeMap keeps the
    /// listing order stable (`device_name` ascending).
    devices: HashMap<Uuid, BTreeMap<String, DeviceSession>>,
    access_points: Vec<AccessPoint>,
}

/// In-memory store backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an account.
    pub async fn insert_account(&self, account: Account) {
        let mut state = self.state.lock().await;
        state.accounts.insert(account.id, account);
    }

    /// Insert an access point into the catalog.
    pub async fn insert_access_point(&self, access_point: AccessPoint) {
        let mut state = self.state.lock().await;
        state.access_points.push(access_point);
    }

    /// Snapshot an account by id (test and dev introspection).
    pub async fn account(&self, id: Uuid) -> Option<Account> {
        let state = self.state.lock().await;
        state.accounts.get(&id).cloned()
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        let state = self.state.lock().await;
        Ok(state.accounts.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Account>> {
        let state = self.state.lock().await;
        Ok(state
            .accounts
            .values()
            .find(|a| a.username.eq_ignore_ascii_case(username))
            .cloned())
    }

    async fn add_used_volume(&self, id: Uuid, delta_mb: f64) -> AppResult<f64> {
        let mut state = self.state.lock().await;
        let account = state
            .accounts
            .get_mut(&id)
            .ok_or_else(|| AppError::account_not_found(format!("Account {id} not found")))?;

        account.used_volume_mb += delta_mb;
        account.updated_at = Utc::now();
        Ok(account.used_volume_mb)
    }
}

#[async_trait]
impl DeviceSessionStore for MemoryStore {
    async fn admit(
        &self,
        account_id: Uuid,
        device_name: &str,
        max_active: u32,
        now: DateTime<Utc>,
    ) -> AppResult<AdmissionOutcome> {
        let mut state = self.state.lock().await;

        if !state.accounts.contains_key(&account_id) {
            return Err(AppError::account_not_found(format!(
                "Account {account_id} not found"
            )));
        }

        let devices = state.devices.entry(account_id).or_default();

        if let Some(session) = devices.get_mut(device_name) {
            if session.is_active {
                session.last_seen_at = now;
                return Ok(AdmissionOutcome::Admitted {
                    session: session.clone(),
                    reused: true,
                });
            }
        }

        let active_count = devices.values().filter(|s| s.is_active).count() as i64;
        if active_count >= i64::from(max_active) {
            return Ok(AdmissionOutcome::LimitExceeded { active_count });
        }

        let session = devices
            .entry(device_name.to_string())
            .and_modify(|s| {
                s.is_active = true;
                s.last_seen_at = now;
            })
            .or_insert_with(|| DeviceSession {
                account_id,
                device_name: device_name.to_string(),
                is_active: true,
                last_seen_at: now,
                created_at: now,
            })
            .clone();

        Ok(AdmissionOutcome::Admitted {
            session,
            reused: false,
        })
    }

    async fn set_active(
        &self,
        account_id: Uuid,
        device_name: &str,
        active: bool,
        now: DateTime<Utc>,
    ) -> AppResult<DeviceSession> {
        let mut state = self.state.lock().await;
        let session = state
            .devices
            .get_mut(&account_id)
            .and_then(|d| d.get_mut(device_name))
            .ok_or_else(|| {
                AppError::device_not_found(format!(
                    "No device '{device_name}' recorded for account {account_id}"
                ))
            })?;

        session.is_active = active;
        session.last_seen_at = now;
        Ok(session.clone())
    }

    async fn list_by_account(&self, account_id: Uuid) -> AppResult<Vec<DeviceSession>> {
        let state = self.state.lock().await;
        Ok(state
            .devices
            .get(&account_id)
            .map(|d| d.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn count_active(&self, account_id: Uuid) -> AppResult<i64> {
        let state = self.state.lock().await;
        Ok(state
            .devices
            .get(&account_id)
            .map(|d| d.values().filter(|s| s.is_active).count() as i64)
            .unwrap_or(0))
    }
}

#[async_trait]
impl AccessPointCatalog for MemoryStore {
    async fn list_online(&self) -> AppResult<Vec<AccessPoint>> {
        let state = self.state.lock().await;
        let mut online: Vec<AccessPoint> = state
            .access_points
            .iter()
            .filter(|ap| ap.is_online())
            .cloned()
            .collect();
        online.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(online)
    }
}
