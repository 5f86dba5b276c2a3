//! Netgate Server — account and entitlement gateway
//!
//! Main entry point that wires all crates together and starts the server.

use std::future::IntoFuture;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use netgate_core::config::AppConfig;
use netgate_core::error::AppError;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("NETGATE_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Netgate v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    tracing::info!("Connecting to database...");
    let db = netgate_database::DatabasePool::connect(&config.database).await?;
    netgate_database::migration::run_migrations(db.pool()).await?;
    db.health_check().await?;
    let pool = db.pool().clone();

    // ── Step 2: Stores ───────────────────────────────────────────
    let account_repo = Arc::new(netgate_database::repositories::AccountRepository::new(
        pool.clone(),
    ));
    let device_repo = Arc::new(
        netgate_database::repositories::DeviceSessionRepository::new(pool.clone()),
    );
    let access_point_repo = Arc::new(
        netgate_database::repositories::AccessPointRepository::new(pool.clone()),
    );

    // ── Step 3: Auth + services ──────────────────────────────────
    tracing::info!("Initializing admission controller and services...");
    let password_hasher = Arc::new(netgate_auth::PasswordHasher::new());

    let admission = Arc::new(netgate_auth::AdmissionController::new(
        account_repo.clone(),
        device_repo.clone(),
        Arc::clone(&password_hasher),
        config.admission.clone(),
    ));
    let entitlements = Arc::new(netgate_service::EntitlementService::new(
        account_repo.clone(),
    ));
    let devices = Arc::new(netgate_service::DeviceService::new(
        account_repo.clone(),
        device_repo.clone(),
    ));
    let traffic = Arc::new(netgate_service::TrafficService::new(account_repo.clone()));
    let catalog = Arc::new(netgate_service::AccessPointService::new(
        access_point_repo.clone(),
    ));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = netgate_api::AppState {
        config: Arc::new(config.clone()),
        admission,
        entitlements,
        devices,
        traffic,
        catalog,
    };

    let app = netgate_api::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Netgate server listening on {addr}");

    // ── Step 5: Graceful shutdown ────────────────────────────────
    let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);
    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
            let _ = shutdown_tx.send(());
        })
        .into_future();

    // Bound connection draining by the configured grace period.
    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
            tracing::info!("Netgate server shut down gracefully");
        }
        _ = async {
            let _ = shutdown_rx.await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(
                grace_seconds = config.server.shutdown_grace_seconds,
                "Grace period elapsed before connections drained; exiting"
            );
        }
    }

    db.close().await;
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
