//! Read-only access point catalog.

use std::sync::Arc;

use netgate_core::result::AppResult;
use netgate_database::store::AccessPointCatalog;
use netgate_entity::AccessPoint;

/// Serves the catalog of connectable access points.
#[derive(Debug, Clone)]
pub struct AccessPointService {
    catalog: Arc<dyn AccessPointCatalog>,
}

impl AccessPointService {
    /// Creates a new access point service.
    pub fn new(catalog: Arc<dyn AccessPointCatalog>) -> Self {
        Self { catalog }
    }

    /// Lists all online access points, ordered by name.
    pub async fn list_online(&self) -> AppResult<Vec<AccessPoint>> {
        self.catalog.list_online().await
    }
}
