//! # netgate-service
//!
//! Business logic service layer for Netgate. Each service orchestrates
//! the store traits to implement application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod catalog;
pub mod device;
pub mod entitlement;
pub mod traffic;

pub use catalog::AccessPointService;
pub use device::DeviceService;
pub use entitlement::{AccountEntitlement, EntitlementService};
pub use traffic::TrafficService;
