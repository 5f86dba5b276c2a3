//! Device session query service.

pub mod service;

pub use service::DeviceService;
