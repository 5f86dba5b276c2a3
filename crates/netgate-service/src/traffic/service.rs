//! Traffic accumulation — folds reported byte counts into used volume.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use netgate_core::result::AppResult;
use netgate_database::store::AccountStore;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Accumulates reported traffic into accounts' used volume.
///
/// The fold is monotonic: used volume never decreases here, only via
/// out-of-scope provisioning resets. No cap is enforced — exceeding the
/// total shows up as zero remaining volume in entitlement evaluations,
/// never as a recording failure.
#[derive(Debug, Clone)]
pub struct TrafficService {
    /// Account store with atomic accumulation.
    accounts: Arc<dyn AccountStore>,
}

impl TrafficService {
    /// Creates a new traffic service.
    pub fn new(accounts: Arc<dyn AccountStore>) -> Self {
        Self { accounts }
    }

    /// Adds the reported upload and download bytes to the account's used
    /// volume and returns the new figure in megabytes.
    ///
    /// Fails with `AccountNotFound` for unknown account ids.
    pub async fn record_traffic(
        &self,
        account_id: Uuid,
        upload_bytes: u64,
        download_bytes: u64,
    ) -> AppResult<f64> {
        let delta_mb = (upload_bytes as f64 + download_bytes as f64) / BYTES_PER_MB;

        let new_used = self.accounts.add_used_volume(account_id, delta_mb).await?;

        info!(
            %account_id,
            upload_bytes,
            download_bytes,
            delta_mb,
            new_used,
            "Traffic recorded"
        );
        Ok(new_used)
    }
}
