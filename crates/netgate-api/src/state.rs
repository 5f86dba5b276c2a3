//! Application state shared across all handlers.

use std::sync::Arc;

use netgate_auth::admission::AdmissionController;
use netgate_core::config::AppConfig;
use netgate_service::{
    AccessPointService, DeviceService, EntitlementService, TrafficService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Login admission controller
    pub admission: Arc<AdmissionController>,
    /// Entitlement reporting service
    pub entitlements: Arc<EntitlementService>,
    /// Device session service
    pub devices: Arc<DeviceService>,
    /// Traffic accumulation service
    pub traffic: Arc<TrafficService>,
    /// Access point catalog service
    pub catalog: Arc<AccessPointService>,
}
