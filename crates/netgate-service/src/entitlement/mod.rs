//! Entitlement query service.

pub mod service;

pub use service::{AccountEntitlement, EntitlementService};
