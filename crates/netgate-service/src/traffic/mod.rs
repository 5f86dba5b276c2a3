//! Traffic accounting service.

pub mod service;

pub use service::TrafficService;
