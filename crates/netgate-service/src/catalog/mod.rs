//! Access point catalog service.

pub mod service;

pub use service::AccessPointService;
