//! Account status value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account standing as stored in the `accounts` table.
///
/// The status set is open: provisioning may write any string, and only
/// `"active"` permits login. Everything else (commonly `"suspended"`)
/// blocks admission, with the stored string echoed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(transparent)]
pub struct AccountStatus(String);

impl AccountStatus {
    /// The only status that permits login.
    pub const ACTIVE: &'static str = "active";

    /// Create a status from a raw string, normalized to lowercase.
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into().to_lowercase())
    }

    /// The active status.
    pub fn active() -> Self {
        Self(Self::ACTIVE.to_string())
    }

    /// The suspended status.
    pub fn suspended() -> Self {
        Self("suspended".to_string())
    }

    /// Whether this status permits login.
    pub fn is_active(&self) -> bool {
        self.0 == Self::ACTIVE
    }

    /// The raw status string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for AccountStatus {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
