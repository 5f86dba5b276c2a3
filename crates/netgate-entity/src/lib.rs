//! # netgate-entity
//!
//! Domain entity models for Netgate. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and table-backed
//! entities additionally derive `sqlx::FromRow`.

pub mod access_point;
pub mod account;
pub mod device;
pub mod entitlement;

pub use access_point::AccessPoint;
pub use account::{Account, AccountStatus};
pub use device::DeviceSession;
pub use entitlement::Entitlement;
