//! # netgate-auth
//!
//! Credential verification, session token generation, and the device
//! admission controller (the login flow) for Netgate.

pub mod admission;
pub mod password;
pub mod token;

pub use admission::{AdmissionController, LoginResult};
pub use password::PasswordHasher;
pub use token::TokenGenerator;
