//! HTTP request handlers, organized by domain.

pub mod auth;
pub mod catalog;
pub mod device;
pub mod entitlement;
pub mod health;
pub mod traffic;
