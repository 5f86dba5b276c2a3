//! # netgate-api
//!
//! HTTP API layer for Netgate built on Axum.
//!
//! Provides the REST endpoints for login admission, entitlement queries,
//! device management, traffic reporting, and the access point catalog,
//! plus the domain-error to HTTP mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
