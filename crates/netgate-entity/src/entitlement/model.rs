//! Point-in-time entitlement facts derived from stored account counters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::account::Account;

/// Derived entitlement snapshot for an account.
///
/// Never stored; computed from an [`Account`] and a point in time.
/// Remaining figures are clamped at zero even when usage or time exceed
/// the allotted totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entitlement {
    /// Whether the subscription cutoff has passed.
    pub expired: bool,
    /// Whole days left until expiry, clamped at zero.
    pub remaining_days: i64,
    /// Megabytes left of the subscription volume, clamped at zero.
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

impl Entitlement {
    /// Evaluate an account's entitlement at the given instant.
    ///
    /// Pure: no side effects, callable both for standalone entitlement
    /// queries and as a login precondition.
    pub fn evaluate(account: &Account, now: DateTime<Utc>) -> Self {
        let expired = now > account.expiry_date;
        let remaining_days = (account.expiry_date - now).num_days().max(0);
        let remaining_volume_mb =
            (account.total_volume_mb - account.used_volume_mb).max(0.0);

        Self {
            expired,
            remaining_days,
            remaining_volume_mb,
            total_volume_mb: account.total_volume_mb,
            used_volume_mb: account.used_volume_mb,
            total_days: account.total_days,
            expiry_date: account.expiry_date,
        }
    }
}
