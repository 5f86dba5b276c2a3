//! Unified application error types for Netgate.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Failure surfaces that callers must
//! tell apart (credential failures, device-limit refusals, missing rows)
//! are distinct [`ErrorKind`] variants, never free-text comparisons.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// Username unknown or password mismatch. The two cases share one
    /// user-visible message so usernames cannot be enumerated.
    InvalidCredentials,
    /// The account exists but its status blocks login (suspended, etc.).
    AccountNotActive,
    /// The account's subscription expiry date has passed.
    SubscriptionExpired,
    /// The account already has the maximum number of active devices.
    DeviceLimitExceeded,
    /// No device session exists for the (account, device name) pair.
    DeviceNotFound,
    /// The referenced account does not exist.
    AccountNotFound,
    /// Input validation failed.
    Validation,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// The durable store is temporarily unreachable. The only retryable
    /// kind; callers should back off and retry.
    StoreUnavailable,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCredentials => write!(f, "INVALID_CREDENTIALS"),
            Self::AccountNotActive => write!(f, "ACCOUNT_NOT_ACTIVE"),
            Self::SubscriptionExpired => write!(f, "SUBSCRIPTION_EXPIRED"),
            Self::DeviceLimitExceeded => write!(f, "DEVICE_LIMIT_EXCEEDED"),
            Self::DeviceNotFound => write!(f, "DEVICE_NOT_FOUND"),
            Self::AccountNotFound => write!(f, "ACCOUNT_NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::StoreUnavailable => write!(f, "STORE_UNAVAILABLE"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Netgate.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether the caller may retry the failed operation.
    ///
    /// Only transient store outages are retryable; every other kind is
    /// final for the request that produced it.
    pub fn is_retryable(&self) -> bool {
        self.kind == ErrorKind::StoreUnavailable
    }

    /// Create an invalid-credentials error with the shared message used
    /// for both unknown usernames and password mismatches.
    pub fn invalid_credentials() -> Self {
        Self::new(ErrorKind::InvalidCredentials, "Invalid username or password")
    }

    /// Create an account-not-active error carrying the stored status string.
    pub fn account_not_active(status: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::AccountNotActive,
            format!("Account is {status}"),
        )
    }

    /// Create a subscription-expired error.
    pub fn subscription_expired() -> Self {
        Self::new(ErrorKind::SubscriptionExpired, "Subscription has expired")
    }

    /// Create a device-limit-exceeded error.
    pub fn device_limit_exceeded(max_devices: u32) -> Self {
        Self::new(
            ErrorKind::DeviceLimitExceeded,
            format!("Maximum of {max_devices} active devices reached"),
        )
    }

    /// Create a device-not-found error.
    pub fn device_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DeviceNotFound, message)
    }

    /// Create an account-not-found error.
    pub fn account_not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::AccountNotFound, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a store-unavailable error.
    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StoreUnavailable, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_store_unavailable_is_retryable() {
        assert!(AppError::store_unavailable("pool exhausted").is_retryable());
        assert!(!AppError::invalid_credentials().is_retryable());
        assert!(!AppError::device_limit_exceeded(2).is_retryable());
        assert!(!AppError::account_not_found("missing").is_retryable());
    }

    #[test]
    fn credential_errors_share_one_message() {
        // Unknown username and wrong password must be indistinguishable.
        assert_eq!(
            AppError::invalid_credentials().message,
            AppError::invalid_credentials().message
        );
    }

    #[test]
    fn account_not_active_echoes_status() {
        let err = AppError::account_not_active("suspended");
        assert_eq!(err.kind, ErrorKind::AccountNotActive);
        assert!(err.message.contains("suspended"));
    }
}
