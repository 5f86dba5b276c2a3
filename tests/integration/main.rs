//! HTTP integration tests over the in-memory store backend.

mod helpers;

mod auth_test;
mod catalog_test;
mod device_test;
mod entitlement_test;
mod traffic_test;
