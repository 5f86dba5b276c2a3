//! Shared test helpers for integration tests.
//!
//! The test app runs the full router over the in-memory store backend,
//! so tests exercise the HTTP surface without a database.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::{DateTime, Duration, Utc};
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use netgate_auth::{AdmissionController, PasswordHasher};
use netgate_core::config::{
    AdmissionConfig, AppConfig, DatabaseConfig, LoggingConfig, ServerConfig,
};
use netgate_database::MemoryStore;
use netgate_entity::{AccessPoint, Account, AccountStatus};
use netgate_service::{
    AccessPointService, DeviceService, EntitlementService, TrafficService,
};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The in-memory store backing the router
    pub store: Arc<MemoryStore>,
    /// Password hasher matching the one inside the admission controller
    pub hasher: Arc<PasswordHasher>,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store.
    pub fn new() -> Self {
        let config = test_config();
        let store = Arc::new(MemoryStore::new());
        let hasher = Arc::new(PasswordHasher::new());

        let admission = Arc::new(AdmissionController::new(
            store.clone(),
            store.clone(),
            Arc::clone(&hasher),
            config.admission.clone(),
        ));
        let entitlements = Arc::new(EntitlementService::new(store.clone()));
        let devices = Arc::new(DeviceService::new(store.clone(), store.clone()));
        let traffic = Arc::new(TrafficService::new(store.clone()));
        let catalog = Arc::new(AccessPointService::new(store.clone()));

        let state = netgate_api::AppState {
            config: Arc::new(config),
            admission,
            entitlements,
            devices,
            traffic,
            catalog,
        };

        Self {
            router: netgate_api::build_router(state),
            store,
            hasher,
        }
    }

    /// Seed an account and return its id.
    pub async fn seed_account(
        &self,
        username: &str,
        password: &str,
        status: AccountStatus,
        used_volume_mb: f64,
        expiry_date: DateTime<Utc>,
    ) -> Uuid {
        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: self
                .hasher
                .hash_password(password)
                .expect("Failed to hash test password"),
            status,
            total_volume_mb: 1000.0,
            used_volume_mb,
            expiry_date,
            total_days: 30,
            created_at: now,
            updated_at: now,
        };
        let id = account.id;
        self.store.insert_account(account).await;
        id
    }

    /// Seed an active account valid for 30 days.
    pub async fn seed_active_account(&self, username: &str, password: &str) -> Uuid {
        self.seed_account(
            username,
            password,
            AccountStatus::active(),
            0.0,
            Utc::now() + Duration::days(30),
        )
        .await
    }

    /// Seed an access point.
    pub async fn seed_access_point(&self, name: &str, status: &str) {
        self.store
            .insert_access_point(AccessPoint {
                id: Uuid::new_v4(),
                name: name.to_string(),
                share_link: format!("ngp://{name}.gate.example:443"),
                status: status.to_string(),
                created_at: Utc::now(),
            })
            .await;
    }

    /// POST /api/auth/login for the given device.
    pub async fn login(&self, username: &str, password: &str, device: &str) -> TestResponse {
        self.request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": username,
                "password": password,
                "device_name": device,
            })),
        )
        .await
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 0,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        admission: AdmissionConfig::default(),
        logging: LoggingConfig::default(),
    }
}
