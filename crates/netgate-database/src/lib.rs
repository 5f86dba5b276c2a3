//! # netgate-database
//!
//! Store interfaces and their backends for Netgate: PostgreSQL connection
//! management, embedded migrations, concrete repositories, and a
//! single-node in-memory backend for development and tests.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use memory::MemoryStore;
pub use store::{AccessPointCatalog, AccountStore, AdmissionOutcome, DeviceSessionStore};
