//! Account domain entities.

pub mod model;
pub mod status;

pub use model::Account;
pub use status::AccountStatus;
