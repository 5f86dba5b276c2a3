//! Single-node in-memory store backend.

pub mod store;

pub use store::MemoryStore;
