//! Device session domain entities.

pub mod model;

pub use model::DeviceSession;
