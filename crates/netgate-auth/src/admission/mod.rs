//! Device admission control.

pub mod controller;

pub use controller::{AdmissionController, LoginResult};
